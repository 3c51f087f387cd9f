use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::route::RouteDescriptor;

/// 路由目录：保持注册顺序的可枚举路由描述集合。
///
/// 注册顺序即轨迹装配的遍历顺序，首条命中优先；目录对装配过程只读。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCatalog {
    entries: Vec<RouteDescriptor>,
}

impl RouteCatalog {
    /// 创建空目录。
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 追加一条描述记录。
    pub fn push(&mut self, descriptor: RouteDescriptor) {
        self.entries.push(descriptor);
    }

    /// 迭代当前目录内容。
    pub fn iter(&self) -> core::slice::Iter<'_, RouteDescriptor> {
        self.entries.iter()
    }

    /// 目录中的路由条数。
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 目录是否为空。
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for RouteCatalog {
    type Item = RouteDescriptor;
    type IntoIter = alloc::vec::IntoIter<RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<RouteDescriptor> for RouteCatalog {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = RouteDescriptor>,
    {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

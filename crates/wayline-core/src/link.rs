use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// 单条面包屑链接：展示 URI 与标签。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbLink {
    uri: String,
    label: String,
}

impl BreadcrumbLink {
    /// 基于展示 URI 与标签构造链接。
    pub fn new<U, L>(uri: U, label: L) -> Self
    where
        U: Into<String>,
        L: Into<String>,
    {
        Self {
            uri: uri.into(),
            label: label.into(),
        }
    }

    /// 读取展示 URI。
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// 读取展示标签。
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// 面包屑轨迹：以链接自身 URI 为键、保持插入顺序的唯一键映射。
///
/// # 教案级说明
/// - **意图 (Why)**：轨迹的层级语义由插入顺序承载（首页入口 → 祖先分组 → 当前页），
///   按键排序的映射结构会破坏该语义；
/// - **契约 (What)**：键唯一；重复插入同键时就地覆盖并保留原位置；
///   `prepend` 将链接移动到队首；
/// - **设计 (How)**：内部以 `Vec` 承载并线性查键，轨迹长度与路径段数同阶，
///   线性扫描免去哈希结构的常数开销；
/// - **权衡 (Trade-offs)**：不适合承载大规模映射，这是面向单请求轨迹的专用容器。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbTrail {
    entries: Vec<BreadcrumbLink>,
}

impl BreadcrumbTrail {
    /// 创建空轨迹。
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 创建仅含单条链接的轨迹。
    pub fn from_link(link: BreadcrumbLink) -> Self {
        let mut trail = Self::new();
        trail.insert(link);
        trail
    }

    /// 插入或就地覆盖：同键链接保留原位置，新键追加到末尾。
    pub fn insert(&mut self, link: BreadcrumbLink) {
        match self.position(link.uri()) {
            Some(position) => self.entries[position] = link,
            None => self.entries.push(link),
        }
    }

    /// 置前插入：移除既有同键链接后放到队首。
    pub fn prepend(&mut self, link: BreadcrumbLink) {
        if let Some(position) = self.position(link.uri()) {
            self.entries.remove(position);
        }
        self.entries.insert(0, link);
    }

    /// 按 URI 查找链接。
    pub fn get(&self, uri: &str) -> Option<&BreadcrumbLink> {
        self.position(uri).map(|position| &self.entries[position])
    }

    /// 迭代轨迹中的链接，顺序即层级顺序。
    pub fn iter(&self) -> core::slice::Iter<'_, BreadcrumbLink> {
        self.entries.iter()
    }

    /// 迭代轨迹中的键序列。
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(BreadcrumbLink::uri)
    }

    /// 轨迹中的链接条数。
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 轨迹是否为空。
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 轨迹首条链接。
    pub fn first(&self) -> Option<&BreadcrumbLink> {
        self.entries.first()
    }

    /// 轨迹末条链接。
    pub fn last(&self) -> Option<&BreadcrumbLink> {
        self.entries.last()
    }

    fn position(&self, uri: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.uri() == uri)
    }
}

impl IntoIterator for BreadcrumbTrail {
    type Item = BreadcrumbLink;
    type IntoIter = alloc::vec::IntoIter<BreadcrumbLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a BreadcrumbTrail {
    type Item = &'a BreadcrumbLink;
    type IntoIter = core::slice::Iter<'a, BreadcrumbLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

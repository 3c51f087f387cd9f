use alloc::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::metadata::TrailMetadata;

/// 路由描述符：URI 模板与类型化元数据的不可变聚合。
///
/// 模板是斜杠分隔的字符串，本 crate 从不解析其参数占位符，只做整串相等比较；
/// 路由匹配本身是宿主框架的职责。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    uri: Cow<'static, str>,
    metadata: TrailMetadata,
}

impl RouteDescriptor {
    /// 基于 URI 模板创建描述符，元数据默认为空。
    pub fn new<S>(uri: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self {
            uri: uri.into(),
            metadata: TrailMetadata::new(),
        }
    }

    /// 补充类型化元数据。
    pub fn with_metadata(mut self, metadata: TrailMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// 读取 URI 模板。
    pub fn uri(&self) -> &str {
        self.uri.as_ref()
    }

    /// 读取元数据。
    pub fn metadata(&self) -> &TrailMetadata {
        &self.metadata
    }

    /// 模板在前缀链中的位置：斜杠计数加一。
    ///
    /// 分组路由在轨迹中的展示 URI 取请求路径前缀链中同深度的元素，
    /// 参数化模板因此解析为该深度上的具体路径值。
    pub fn depth(&self) -> usize {
        self.uri.matches('/').count() + 1
    }
}

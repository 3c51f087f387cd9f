use alloc::borrow::Cow;

use serde::{Deserialize, Serialize};

/// 面包屑路由元数据，以显式类型化字段取代动态键值袋。
///
/// # 教案级说明
/// - **意图 (Why)**：路由声明期即可获得编译期字段检查，避免运行时从任意元数据袋中
///   读取拼写错误的键名；
/// - **契约 (What)**：`breadcrumb`/`group`/`index` 为参与轨迹装配的开关位；
///   `collection` 将路由划入命名子树，限定轨迹推导的路由范围；
///   `title` 是默认链接工厂读取的展示标签注解；
/// - **设计 (How)**：Builder 风格 `with_*` 方法链式叠加，构造完成后保持不可变语义；
/// - **权衡 (Trade-offs)**：`Cow<'static, str>` 兼顾静态字面量零拷贝与运行时动态分配。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailMetadata {
    breadcrumb: bool,
    group: bool,
    index: bool,
    collection: Option<Cow<'static, str>>,
    title: Option<Cow<'static, str>>,
}

impl TrailMetadata {
    /// 创建全部开关关闭的空元数据。
    pub fn new() -> Self {
        Self::default()
    }

    /// 标记该路由参与面包屑展示。
    pub fn with_breadcrumb(mut self) -> Self {
        self.breadcrumb = true;
        self
    }

    /// 标记该路由为祖先分组节点。
    pub fn with_group(mut self) -> Self {
        self.group = true;
        self
    }

    /// 标记该路由为首页入口。
    pub fn with_index(mut self) -> Self {
        self.index = true;
        self
    }

    /// 将路由划入命名的面包屑集合。
    pub fn with_collection<S>(mut self, collection: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.collection = Some(collection.into());
        self
    }

    /// 附加展示标签注解，由链接工厂读取。
    pub fn with_title<S>(mut self, title: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.title = Some(title.into());
        self
    }

    /// 是否参与面包屑展示。
    pub fn is_breadcrumb(&self) -> bool {
        self.breadcrumb
    }

    /// 是否为祖先分组节点。
    pub fn is_group(&self) -> bool {
        self.group
    }

    /// 是否为首页入口。
    pub fn is_index(&self) -> bool {
        self.index
    }

    /// 所属面包屑集合标签。
    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    /// 展示标签注解。
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 空元数据所有开关关闭、注解缺省。
    #[test]
    fn new_metadata_has_everything_unset() {
        let metadata = TrailMetadata::new();
        assert!(!metadata.is_breadcrumb());
        assert!(!metadata.is_group());
        assert!(!metadata.is_index());
        assert_eq!(metadata.collection(), None);
        assert_eq!(metadata.title(), None);
    }

    /// Builder 方法只影响各自字段。
    #[test]
    fn builder_methods_set_independent_fields() {
        let metadata = TrailMetadata::new()
            .with_breadcrumb()
            .with_group()
            .with_collection("admin")
            .with_title("用户");
        assert!(metadata.is_breadcrumb());
        assert!(metadata.is_group());
        assert!(!metadata.is_index());
        assert_eq!(metadata.collection(), Some("admin"));
        assert_eq!(metadata.title(), Some("用户"));
    }
}

use alloc::borrow::Cow;
use alloc::vec::Vec;

/// 路由声明的轻量预检结果，仅承载非致命警告。
///
/// 预检不阻断注册：警告指向“声明了但永远不会生效”的元数据组合，
/// 由注册方决定记录或忽略。
#[derive(Clone, Debug, Default)]
pub struct RouteValidation {
    warnings: Vec<Cow<'static, str>>,
}

impl RouteValidation {
    /// 创建空的校验结果。
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// 追加一条警告。
    pub fn push<W>(&mut self, warning: W)
    where
        W: Into<Cow<'static, str>>,
    {
        self.warnings.push(warning.into());
    }

    /// 访问警告集合，用于日志或诊断输出。
    pub fn warnings(&self) -> &[Cow<'static, str>] {
        &self.warnings
    }

    /// 是否未产生任何警告。
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

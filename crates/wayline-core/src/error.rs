//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 集中定义路由注册期的错误语义；轨迹装配路径是全函数，缺失路由以 `None`
//!   表达，永不进入本错误域。
//!
//! ## 设计要求（What）
//! - 启用 `std` 特性时实现 `thiserror::Error` 以接入生态；
//! - `no_std` 轨道下提供等价的手写 `Display`，保证诊断文本一致。

use alloc::string::String;

#[cfg(not(feature = "std"))]
use core::fmt;

/// 路由注册期的错误域。
///
/// # 教案级说明
/// - **意图 (Why)**：重复或空的 URI 模板会破坏“注册顺序即遍历顺序、键唯一”的
///   目录不变量，必须在声明现场拒绝而非装配期容忍；
/// - **契约 (What)**：所有变体 `Send + Sync + 'static`，可安全跨线程传播；
/// - **权衡 (Trade-offs)**：以 `String` 保存出错的 URI，牺牲一次堆分配换取
///   可读的诊断信息。
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrailError {
    /// URI 模板为空字符串。
    #[cfg_attr(feature = "std", error("route uri must not be empty"))]
    EmptyUri,
    /// 同一 URI 模板被重复注册。
    #[cfg_attr(feature = "std", error("route uri `{uri}` is already registered"))]
    DuplicateUri {
        /// 冲突的 URI 模板。
        uri: String,
    },
}

#[cfg(not(feature = "std"))]
impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailError::EmptyUri => write!(f, "route uri must not be empty"),
            TrailError::DuplicateUri { uri } => {
                write!(f, "route uri `{uri}` is already registered")
            }
        }
    }
}

//! # wayline-core Prelude
//!
//! 遵循社区 Prelude 惯例，为上层 crate 提供稳定、浅路径的导入入口：
//! `use wayline_core::prelude::*;` 即可获取装配所需的全部契约类型。
//! 仅收录跨模块高频依赖的类型，边缘能力仍建议使用明确命名空间。

pub use crate::catalog::RouteCatalog;
pub use crate::error::TrailError;
pub use crate::factory::{BreadcrumbLinkFactory, TitleLinkFactory};
pub use crate::link::{BreadcrumbLink, BreadcrumbTrail};
pub use crate::metadata::TrailMetadata;
pub use crate::prefix::prefix_chain;
pub use crate::request::RequestContext;
pub use crate::route::RouteDescriptor;
pub use crate::validation::RouteValidation;

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc = "wayline-core: 路由表面包屑轨迹的契约与纯函数核心。"]
#![doc = ""]
#![doc = "本 crate 定位于 `no_std + alloc` 场景：路由目录、请求视图、轨迹容器与前缀链"]
#![doc = "纯函数均只依赖 [`alloc`]，供宿主框架在任意运行时内同步调用。"]
#![doc = "线程安全的默认装配实现见 `wayline-trail`。"]

extern crate alloc;

pub mod catalog;
pub mod error;
pub mod factory;
pub mod link;
pub mod metadata;
pub mod prefix;
pub mod prelude;
pub mod request;
pub mod route;
pub mod validation;

pub use catalog::RouteCatalog;
pub use error::TrailError;
pub use factory::{BreadcrumbLinkFactory, TitleLinkFactory};
pub use link::{BreadcrumbLink, BreadcrumbTrail};
pub use metadata::TrailMetadata;
pub use prefix::prefix_chain;
pub use request::RequestContext;
pub use route::RouteDescriptor;
pub use validation::RouteValidation;

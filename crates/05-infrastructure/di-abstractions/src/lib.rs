//! # Dependency Injection Abstractions
//!
//! 元数据标记引擎的抽象层，定义元数据存储与标记调用的核心接口。
//!
//! ## 核心接口
//!
//! - [`MetadataReader`] - 解析引擎读取元数据的接口
//! - [`MetadataStore`] - 元数据侧表的读写接口
//! - [`Decorator`] - 标记（装饰器）接口
//! - [`Injectable`] - 声明式注册的类型接口

pub mod decorator;
pub mod injectable;
pub mod store;

pub use decorator::*;
pub use injectable::*;
pub use store::*;

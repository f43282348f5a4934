//! # 元数据标记引擎
//!
//! 把注入意图（元数据）记录到类型的构造函数参数与实例属性上，供解析引擎读取。
//!
//! 每次注册依次经过：
//!
//! 1. [`classifier`] - 识别调用形态：参数、属性或类本身
//! 2. [`guard`] - 合法性检查
//! 3. [`duplicate`] - 重复键检查
//! 4. [`store`] - 写入以类型身份为键的侧表
//!
//! [`decorate`] 提供命令式的应用方式，[`builder`] 提供按类型集中注册的方式，
//! 两者与派生宏写入的是同一个存储。

pub mod builder;
pub mod classifier;
pub mod decorate;
pub mod duplicate;
pub mod guard;
pub mod store;
pub mod tagging;

pub use builder::TargetMetadataBuilder;
pub use classifier::{classify, TargetShape};
pub use decorate::{decorate, decorate_all, DecorateSlot};
pub use store::{global_metadata_store, InMemoryMetadataStore};
pub use tagging::{create_tagged_decorator, tag_parameter, tag_property, TaggedDecorator};

//! # Injection Macros
//!
//! 这个 crate 提供声明式注册注入元数据的派生宏。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use injection_macros::Injectable;
//!
//! #[derive(Injectable)]
//! #[injectable(auto_register)]
//! pub struct Ninja {
//!     #[inject(named = "katana")]
//!     #[inject(tagged(key = "can_throw", value = false))]
//!     weapon: Katana,
//! }
//! ```
//!
//! 生成的代码引用 `infrastructure_common`、`di_abstractions` 与 `di_impl`，
//! 使用 `auto_register` 时还需要依赖 `ctor`。

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod injectable;

/// 可注入类型派生宏
///
/// 为结构体实现 `Injectable` trait。命名字段的标记登记为实例属性元数据，
/// 元组字段的标记按位置登记为构造函数参数元数据。
///
/// # 字段参数
///
/// 每个 `#[inject(...)]` 属性对应一次注册，同一属性内的键不能重复：
///
/// - `named = "..."` - 具名依赖
/// - `name = "..."` - 名称
/// - `id = "..."` - 注入的服务标识符
/// - `multi = "..."` - 多实例注入的服务标识符
/// - `optional` - 可选依赖
/// - `unmanaged` - 不由容器管理
/// - `tagged(key = "...", value = ...)` - 自定义键值
///
/// # 结构体参数
///
/// - `#[injectable(auto_register)]` - 启动时注册到全局存储
#[proc_macro_derive(Injectable, attributes(inject, injectable))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

//! `#[inject(...)]` 与 `#[injectable(...)]` 属性解析

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Lit, LitStr, Result};

/// 单个标记
#[derive(Debug, Clone)]
pub enum TagSpec {
    /// `named = "..."`
    Named(LitStr),
    /// `name = "..."`
    Name(LitStr),
    /// `id = "..."`，注入的服务标识符
    Inject(LitStr),
    /// `multi = "..."`，多实例注入的服务标识符
    MultiInject(LitStr),
    /// `optional`
    Optional,
    /// `unmanaged`
    Unmanaged,
    /// `tagged(key = "...", value = <字面量>)`
    Tagged { key: LitStr, value: Lit },
}

impl TagSpec {
    /// 生成对应的 `MetadataEntry` 表达式
    pub fn to_entry(&self) -> TokenStream {
        let entry = quote! { ::infrastructure_common::MetadataEntry::new };
        let keys = quote! { ::infrastructure_common::keys };

        match self {
            Self::Named(value) => quote! { #entry(#keys::NAMED_TAG, #value) },
            Self::Name(value) => quote! { #entry(#keys::NAME_TAG, #value) },
            Self::Inject(id) => quote! {
                #entry(#keys::INJECT_TAG, ::infrastructure_common::Identifier::from(#id))
            },
            Self::MultiInject(id) => quote! {
                #entry(#keys::MULTI_INJECT_TAG, ::infrastructure_common::Identifier::from(#id))
            },
            Self::Optional => quote! { #entry(#keys::OPTIONAL_TAG, true) },
            Self::Unmanaged => quote! { #entry(#keys::UNMANAGED_TAG, true) },
            Self::Tagged { key, value } => quote! { #entry(#key, #value) },
        }
    }
}

/// 解析字段上的全部 `#[inject(...)]` 属性
///
/// 每个属性对应一次注册调用，返回值按属性出现的顺序排列。
pub fn parse_inject_attrs(attrs: &[Attribute]) -> Result<Vec<Vec<TagSpec>>> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("inject"))
        .map(parse_inject_attr)
        .collect()
}

fn parse_inject_attr(attr: &Attribute) -> Result<Vec<TagSpec>> {
    let mut tags = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("named") {
            tags.push(TagSpec::Named(meta.value()?.parse()?));
        } else if meta.path.is_ident("name") {
            tags.push(TagSpec::Name(meta.value()?.parse()?));
        } else if meta.path.is_ident("id") {
            tags.push(TagSpec::Inject(meta.value()?.parse()?));
        } else if meta.path.is_ident("multi") {
            tags.push(TagSpec::MultiInject(meta.value()?.parse()?));
        } else if meta.path.is_ident("optional") {
            tags.push(TagSpec::Optional);
        } else if meta.path.is_ident("unmanaged") {
            tags.push(TagSpec::Unmanaged);
        } else if meta.path.is_ident("tagged") {
            let mut key: Option<LitStr> = None;
            let mut value: Option<Lit> = None;
            meta.parse_nested_meta(|inner| {
                if inner.path.is_ident("key") {
                    key = Some(inner.value()?.parse()?);
                } else if inner.path.is_ident("value") {
                    let lit: Lit = inner.value()?.parse()?;
                    ensure_supported_value(&lit)?;
                    value = Some(lit);
                } else {
                    return Err(inner.error("tagged 只支持 key 与 value 参数"));
                }
                Ok(())
            })?;
            let key = key.ok_or_else(|| meta.error("tagged 缺少 key 参数"))?;
            let value = value.ok_or_else(|| meta.error("tagged 缺少 value 参数"))?;
            tags.push(TagSpec::Tagged { key, value });
        } else {
            return Err(meta.error(
                "不支持的 inject 参数，可用: named, name, id, multi, optional, unmanaged, tagged",
            ));
        }
        Ok(())
    })?;

    Ok(tags)
}

/// tagged 的值只接受字符串、布尔与 i32/i64 整数字面量
fn ensure_supported_value(lit: &Lit) -> Result<()> {
    match lit {
        Lit::Str(_) | Lit::Bool(_) => Ok(()),
        Lit::Int(int) if matches!(int.suffix(), "" | "i32" | "i64") => Ok(()),
        other => Err(syn::Error::new(
            other.span(),
            "tagged 的 value 只支持字符串、布尔或 i32/i64 整数",
        )),
    }
}

/// 容器属性 `#[injectable(...)]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjectableArgs {
    /// 进程启动时自动注册到全局存储
    pub auto_register: bool,
}

/// 解析结构体上的 `#[injectable(...)]` 属性
pub fn parse_injectable_args(attrs: &[Attribute]) -> Result<InjectableArgs> {
    let mut args = InjectableArgs::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("injectable")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("auto_register") {
                args.auto_register = true;
                Ok(())
            } else {
                Err(meta.error("不支持的 injectable 参数，可用: auto_register"))
            }
        })?;
    }

    Ok(args)
}

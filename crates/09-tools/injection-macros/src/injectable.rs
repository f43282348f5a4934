//! `#[derive(Injectable)]` 实现

use crate::attrs::{parse_inject_attrs, parse_injectable_args, TagSpec};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, GenericParam, Ident, Result};

/// 展开派生宏
pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let data = match &input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "Injectable 只能用于结构体",
            ))
        }
    };

    let args = parse_injectable_args(&input.attrs)?;
    let registrations = field_registrations(&data.fields)?;

    let struct_name = &input.ident;
    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(syn::parse_quote!('static));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let registration_hook = if args.auto_register {
        if !input.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &input.generics,
                "auto_register 不支持泛型结构体，请显式调用 register_metadata",
            ));
        }
        generate_registration_code(struct_name)
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable for #struct_name #ty_generics #where_clause {
            fn register_metadata(
                store: &dyn ::di_abstractions::MetadataStore,
            ) -> ::infrastructure_common::MetadataResult<()> {
                #(#registrations)*
                Ok(())
            }
        }

        #registration_hook
    })
}

/// 每个 `#[inject(...)]` 属性生成一次注册调用
fn field_registrations(fields: &Fields) -> Result<Vec<TokenStream>> {
    let mut registrations = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        for call in parse_inject_attrs(&field.attrs)? {
            let entries = call.iter().map(TagSpec::to_entry);
            let payload = quote! { ::std::vec![#(#entries),*] };

            let registration = match &field.ident {
                Some(ident) => {
                    let property = ident.to_string();
                    quote! {
                        ::di_impl::tag_property(
                            store,
                            &::di_abstractions::DecoratorTarget::prototype_of::<Self>(),
                            #property,
                            #payload,
                        )?;
                    }
                }
                None => quote! {
                    ::di_impl::tag_parameter(
                        store,
                        &::infrastructure_common::TypeInfo::of::<Self>(),
                        ::std::option::Option::None,
                        #index,
                        #payload,
                    )?;
                },
            };
            registrations.push(registration);
        }
    }

    Ok(registrations)
}

/// 生成启动时自动注册到全局存储的代码
fn generate_registration_code(struct_name: &Ident) -> TokenStream {
    let registration_fn_name = Ident::new(
        &format!(
            "__register_injectable_{}",
            to_snake_case(&struct_name.to_string())
        ),
        Span::call_site(),
    );
    let type_name = struct_name.to_string();

    quote! {
        // 使用 ctor 在程序启动时注册元数据，声明有误时终止加载
        #[ctor::ctor]
        #[allow(non_snake_case)]
        fn #registration_fn_name() {
            let store = ::di_impl::global_metadata_store();
            if let ::std::result::Result::Err(e) =
                <#struct_name as ::di_abstractions::Injectable>::register_metadata(store)
            {
                ::std::panic!("类型 {} 的元数据注册失败: {}", #type_name, e);
            }
        }
    }
}

/// 转换为蛇形命名
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();

    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

//! Auto CVar attribute macro implementation
//!
//! Provides the `#[auto_cvar]` attribute that turns a plain static into a
//! lazily registered CVar handle.

use darling::FromMeta;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{ItemStatic, StaticMutability, Type};

/// Flags inside `flags(...)`
#[derive(Debug, Default, FromMeta)]
#[darling(default)]
pub struct FlagArgs {
    pub read_only: bool,
    pub read_and_write: bool,
    pub init_once: bool,
}

/// Arguments to the auto_cvar attribute
///
/// Usage:
/// - `#[auto_cvar(name = "r.Bloom.Intensity")]`
/// - `#[auto_cvar(name = "r.Shadow.Technique", description = "...", category = "Shadows", flags(init_once))]`
#[derive(Debug, FromMeta)]
pub struct AutoCVarArgs {
    /// CVar name (e.g., "r.Bloom.Intensity")
    pub name: String,
    /// Help text
    #[darling(default)]
    pub description: String,
    /// Display grouping
    #[darling(default)]
    pub category: String,
    /// Write restrictions
    #[darling(default)]
    pub flags: FlagArgs,
}

impl AutoCVarArgs {
    fn validate(&self) -> syn::Result<()> {
        if self.name.trim().is_empty() {
            return Err(syn::Error::new(Span::call_site(), "CVar name must not be empty"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(syn::Error::new(
                Span::call_site(),
                "CVar name must not contain whitespace",
            ));
        }
        Ok(())
    }

    fn flags_tokens(&self) -> TokenStream {
        let mut flags = Vec::new();
        if self.flags.read_only {
            flags.push(quote! { ::autocvar_core::cvars::CVarFlags::READ_ONLY });
        }
        if self.flags.read_and_write {
            flags.push(quote! { ::autocvar_core::cvars::CVarFlags::READ_AND_WRITE });
        }
        if self.flags.init_once {
            flags.push(quote! { ::autocvar_core::cvars::CVarFlags::INIT_ONCE });
        }

        if flags.is_empty() {
            quote! { ::autocvar_core::cvars::CVarFlags::empty() }
        } else {
            quote! { #(#flags)|* }
        }
    }
}

/// Check if the static's type is `String` (defaults may then be `&str` literals)
fn is_string_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "String")
            .unwrap_or(false),
        _ => false,
    }
}

/// Generate the auto_cvar implementation
pub fn generate_auto_cvar(args: AutoCVarArgs, item: ItemStatic) -> TokenStream {
    if let Err(err) = args.validate() {
        return err.to_compile_error();
    }
    if !matches!(item.mutability, StaticMutability::None) {
        return syn::Error::new_spanned(&item.mutability, "auto_cvar statics cannot be `mut`")
            .to_compile_error();
    }

    let ItemStatic {
        attrs,
        vis,
        ident,
        ty,
        expr,
        ..
    } = item;

    let name = &args.name;
    let description = &args.description;
    let category = &args.category;
    let flags = args.flags_tokens();

    let default = if is_string_type(&ty) {
        quote! { ::std::string::ToString::to_string(&(#expr)) }
    } else {
        quote! { #expr }
    };

    // Generate the registration function name
    let register_fn_name = format_ident!(
        "{}_register",
        ident.to_string().to_lowercase(),
        span = ident.span()
    );

    quote! {
        #(#attrs)*
        #vis static #ident: ::std::sync::LazyLock<::autocvar_core::cvars::AutoCVar<#ty>> =
            ::std::sync::LazyLock::new(|| {
                let default: #ty = #default;
                ::autocvar_core::cvars::AutoCVar::new(
                    #name,
                    #description,
                    #category,
                    default,
                    #flags,
                )
            });

        /// Register this CVar now instead of on first use
        #[allow(dead_code)]
        #vis fn #register_fn_name() -> &'static ::autocvar_core::cvars::AutoCVar<#ty> {
            ::std::sync::LazyLock::force(&#ident)
        }
    }
}

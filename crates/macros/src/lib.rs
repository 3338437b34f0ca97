//! AutoCVar Proc Macros
//!
//! This crate provides the `#[auto_cvar]` attribute for declaring CVar
//! handles as statics.
//!
//! # Example
//!
//! ```ignore
//! use autocvar_core::auto_cvar;
//!
//! #[auto_cvar(name = "r.Bloom.Intensity", description = "Bloom intensity", category = "Render")]
//! pub static BLOOM_INTENSITY: f32 = 1.5;
//!
//! #[auto_cvar(name = "r.Shadow.Technique", flags(init_once))]
//! pub static SHADOW_TECHNIQUE: String = "pcf";
//!
//! // Generated:
//! // - BLOOM_INTENSITY: LazyLock<AutoCVar<f32>>
//! // - bloom_intensity_register() - Register the CVar now
//! ```
//!
//! # Attributes
//!
//! - `name = "..."` - **Required.** The CVar name.
//! - `description = "..."` - Help text shown by the console.
//! - `category = "..."` - Display grouping.
//! - `flags(read_only, read_and_write, init_once)` - Any combination of flags.

mod auto_cvar;

use darling::ast::NestedMeta;
use darling::FromMeta;
use proc_macro::TokenStream;
use syn::{parse_macro_input, ItemStatic};

/// Attribute macro for CVar declaration
///
/// Turns `static NAME: T = default;` into a `LazyLock<AutoCVar<T>>` that
/// registers the CVar with the global registry on first use, and generates
/// `{name}_register()` to force that registration during startup.
///
/// `T` must be `i32`, `f32`, `f64` or `String`. For `String` the default may
/// be a string literal.
///
/// # Example
///
/// ```ignore
/// use autocvar_core::auto_cvar;
///
/// #[auto_cvar(name = "r.Shadow.FixCascade", description = "Fix shadow cascade", flags(read_only))]
/// static FIX_CASCADE: i32 = 1;
///
/// fn init() {
///     fix_cascade_register();
/// }
/// ```
#[proc_macro_attribute]
pub fn auto_cvar(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(list) => list,
        Err(err) => return TokenStream::from(darling::Error::from(err).write_errors()),
    };
    let args = match auto_cvar::AutoCVarArgs::from_list(&attr_args) {
        Ok(args) => args,
        Err(err) => return TokenStream::from(err.write_errors()),
    };
    let item = parse_macro_input!(item as ItemStatic);
    auto_cvar::generate_auto_cvar(args, item).into()
}

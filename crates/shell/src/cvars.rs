//! Tunables exposed by the shell

use autocvar_core::auto_cvar;

#[auto_cvar(
    name = "r.Bloom.Intensity",
    description = "Bloom intensity",
    category = "Render",
    flags(read_and_write)
)]
pub static BLOOM_INTENSITY: f32 = 1.5;

#[auto_cvar(
    name = "r.Shadow.FixCascade",
    description = "Render every shadow from one cascade (-1 = off)",
    category = "Shadows"
)]
pub static SHADOW_FIX_CASCADE: i32 = -1;

#[auto_cvar(
    name = "r.Shadow.Softness",
    description = "Penumbra scale",
    category = "Shadows"
)]
pub static SHADOW_SOFTNESS: f64 = 0.5;

#[auto_cvar(
    name = "r.Shadow.Technique",
    description = "Shadow filtering, fixed at startup",
    category = "Shadows",
    flags(init_once)
)]
pub static SHADOW_TECHNIQUE: String = "pcf";

#[auto_cvar(name = "sys.Version", description = "Shell version", category = "System", flags(read_only))]
pub static VERSION: String = env!("CARGO_PKG_VERSION");

/// Register every shell CVar so completion sees them before first use
pub fn register_all() {
    bloom_intensity_register();
    shadow_fix_cascade_register();
    shadow_softness_register();
    shadow_technique_register();
    version_register();
}

#[cfg(test)]
mod tests {
    use super::*;
    use autocvar_core::{commands, CommandError};

    #[test]
    fn test_register_all() {
        register_all();

        assert_eq!(
            commands::complete("r.shadow."),
            vec!["r.Shadow.FixCascade", "r.Shadow.Softness", "r.Shadow.Technique"]
        );
        assert_eq!(SHADOW_FIX_CASCADE.get(), -1);
        assert!(matches!(
            commands::execute("sys.Version 2"),
            Err(CommandError::ReadOnly(_))
        ));
        assert_eq!(VERSION.get(), env!("CARGO_PKG_VERSION"));
    }
}

use std::{collections::HashMap, sync::LazyLock};

use log::debug;
use swivel_config::RotationConfig;
use swivel_core::{Identifier, RotationScheme};

/// The built-in registry, without any configuration applied
pub static ROTATION_SCHEMES: LazyLock<RotationRegistry> = LazyLock::new(RotationRegistry::builtin);

const BUILTIN_SCHEMES: &[(&str, RotationScheme)] = {
    use RotationScheme::*;
    &[
        ("bed", Prevented),
        ("stone_slab", Slab),
        ("wooden_slab", Slab),
        ("rail", Rail),
        ("golden_rail", Rail),
        ("detector_rail", Rail),
        ("activator_rail", Rail),
        ("pumpkin", Pumpkin),
        ("lit_pumpkin", Pumpkin),
        ("furnace", FourWay),
        ("lit_furnace", FourWay),
        ("ender_chest", FourWay),
        ("trapped_chest", Chest),
        ("chest", Chest),
        ("dispenser", SixWay),
        ("sticky_piston", SixWay),
        ("piston", SixWay),
        ("hopper", SixWay),
        ("dropper", SixWay),
        ("unpowered_repeater", Redstone),
        ("unpowered_comparator", Redstone),
        ("powered_repeater", Redstone),
        ("powered_comparator", Redstone),
        ("lever", Lever),
        ("standing_sign", Sign),
        ("log", Log),
        ("log2", Log),
        ("oak_stairs", Stairs),
        ("stone_stairs", Stairs),
        ("brick_stairs", Stairs),
        ("stone_brick_stairs", Stairs),
        ("nether_brick_stairs", Stairs),
        ("sandstone_stairs", Stairs),
        ("spruce_stairs", Stairs),
        ("birch_stairs", Stairs),
        ("jungle_stairs", Stairs),
        ("quartz_stairs", Stairs),
    ]
};

/// Maps block types to the way their metadata rotates. Filled once at startup and
/// read-only afterwards; unknown types resolve to [`RotationScheme::Passthrough`].
#[derive(Clone, Debug, Default)]
pub struct RotationRegistry {
    schemes: HashMap<Identifier, RotationScheme>,
}

impl RotationRegistry {
    pub fn builtin() -> Self {
        let registry: Self = BUILTIN_SCHEMES
            .iter()
            .map(|&(path, scheme)| (Identifier::vanilla(path), scheme))
            .collect();
        debug!("Registered {} built-in rotation schemes", registry.len());
        registry
    }

    /// The built-in schemes with the configured overrides layered on top.
    pub fn from_config(config: &RotationConfig) -> Self {
        let mut registry = Self::builtin();
        for (kind, scheme) in &config.overrides {
            debug!("Rotation scheme of {kind} set to {scheme}");
            registry.schemes.insert(kind.clone(), *scheme);
        }
        for kind in &config.disabled {
            if registry.schemes.remove(kind).is_some() {
                debug!("Rotation of {kind} disabled");
            }
        }
        registry
    }

    pub fn scheme(&self, kind: &Identifier) -> RotationScheme {
        self.schemes.get(kind).copied().unwrap_or_default()
    }

    pub fn can_rotate(&self, kind: &Identifier) -> bool {
        self.scheme(kind).can_rotate()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl FromIterator<(Identifier, RotationScheme)> for RotationRegistry {
    fn from_iter<T: IntoIterator<Item = (Identifier, RotationScheme)>>(iter: T) -> Self {
        Self {
            schemes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use swivel_config::LoadTomlConfiguration;

    use super::*;

    #[test]
    fn builtin_lookup() {
        let registry = RotationRegistry::builtin();
        assert_eq!(registry.len(), BUILTIN_SCHEMES.len());
        assert_eq!(
            registry.scheme(&Identifier::vanilla("chest")),
            RotationScheme::Chest
        );
        assert_eq!(
            registry.scheme(&Identifier::vanilla("quartz_stairs")),
            RotationScheme::Stairs
        );
        assert_eq!(
            registry.scheme(&Identifier::vanilla("bed")),
            RotationScheme::Prevented
        );
        assert!(registry.can_rotate(&Identifier::vanilla("bed")));
    }

    #[test]
    fn unknown_type_passes_through() {
        let registry = &*ROTATION_SCHEMES;
        let stone = Identifier::vanilla("stone");
        assert_eq!(registry.scheme(&stone), RotationScheme::Passthrough);
        assert!(!registry.can_rotate(&stone));

        let modded: Identifier = "thermal:chest".parse().unwrap();
        assert_eq!(registry.scheme(&modded), RotationScheme::Passthrough);
    }

    #[test]
    fn config_overrides_and_disables() {
        let config = RotationConfig::parse(
            r#"
            disabled = ["minecraft:lever", "minecraft:not_registered"]

            [overrides]
            "minecraft:observer" = "six_way"
            "minecraft:pumpkin" = "four_way"
            "#,
        )
        .unwrap();
        let registry = RotationRegistry::from_config(&config);

        assert_eq!(
            registry.scheme(&Identifier::vanilla("observer")),
            RotationScheme::SixWay
        );
        assert_eq!(
            registry.scheme(&Identifier::vanilla("pumpkin")),
            RotationScheme::FourWay
        );
        assert!(!registry.can_rotate(&Identifier::vanilla("lever")));
        assert_eq!(registry.len(), BUILTIN_SCHEMES.len());
    }
}

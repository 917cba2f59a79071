use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ball material. Only used to pick a density at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Granite,
    Glass,
    Plastic,
    Diamond,
    Titanium,
}

/// Fixed material table, in draw order.
pub const MATERIALS: [Material; 5] = [
    Material::Granite,
    Material::Glass,
    Material::Plastic,
    Material::Diamond,
    Material::Titanium,
];

impl Material {
    /// Density scalar for this material.
    #[inline]
    pub const fn density(self) -> f64 {
        match self {
            Material::Granite => 2.7,
            Material::Glass => 2.5,
            Material::Plastic => 1.175,
            Material::Diamond => 3.5,
            Material::Titanium => 4.54,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Material::Granite => "granite",
            Material::Glass => "glass",
            Material::Plastic => "plastic",
            Material::Diamond => "diamond",
            Material::Titanium => "titanium",
        }
    }

    /// Uniform draw from `palette`. Returns `None` for an empty palette.
    pub fn sample<R: Rng + ?Sized>(palette: &[Material], rng: &mut R) -> Option<Material> {
        if palette.is_empty() {
            return None;
        }
        Some(palette[rng.random_range(0..palette.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn densities_match_table() {
        let d: Vec<f64> = MATERIALS.iter().map(|m| m.density()).collect();
        assert_eq!(d, vec![2.7, 2.5, 1.175, 3.5, 4.54]);
        assert!(MATERIALS.iter().all(|m| m.density() > 0.0));
    }

    #[test]
    fn sample_stays_in_palette() {
        let mut rng = StdRng::seed_from_u64(9);
        let palette = [Material::Glass, Material::Diamond];
        for _ in 0..200 {
            let m = Material::sample(&palette, &mut rng).unwrap();
            assert!(palette.contains(&m));
        }
        assert!(Material::sample(&[], &mut rng).is_none());
    }

    #[test]
    fn serde_names_are_lowercase() {
        let json = serde_json::to_string(&Material::Titanium).unwrap();
        assert_eq!(json, "\"titanium\"");
        let back: Material = serde_json::from_str("\"plastic\"").unwrap();
        assert_eq!(back, Material::Plastic);
        assert_eq!(back.name(), "plastic");
    }
}

// src/math/geometry/sphere/edge_key.rs

const HALF_MASK: u64 = 0xFFFF;

/// Kanonischer Schlüssel für eine ungeordnete Kante (i1, i2).
///
/// Beide Indizes werden in ihre 16-Bit-Hälften zerlegt, jede Hälfte bekommt ein
/// eigenes Feld im `u64`:
///
/// | Bits  | Inhalt                          |
/// |-------|---------------------------------|
/// | 48–63 | obere Hälfte des kleineren Index |
/// | 32–47 | obere Hälfte des größeren Index  |
/// | 16–31 | untere Hälfte des kleineren Index|
/// | 0–15  | untere Hälfte des größeren Index |
///
/// Damit ist die Abbildung für den gesamten `u32`-Bereich injektiv und
/// `key(i1, i2) == key(i2, i1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(u64);

impl EdgeKey {
    pub fn new(i1: u32, i2: u32) -> Self {
        let (smaller, greater) = if i1 < i2 { (i1, i2) } else { (i2, i1) };
        let smaller = u64::from(smaller);
        let greater = u64::from(greater);

        Self(
            ((smaller >> 16) << 48)
                | ((greater >> 16) << 32)
                | ((smaller & HALF_MASK) << 16)
                | (greater & HALF_MASK),
        )
    }

    /// Die beiden Endpunkte, kleinerer Index zuerst.
    pub fn endpoints(self) -> (u32, u32) {
        let k = self.0;
        let smaller = (((k >> 48) & HALF_MASK) << 16) | ((k >> 16) & HALF_MASK);
        let greater = (((k >> 32) & HALF_MASK) << 16) | (k & HALF_MASK);
        // Beide Werte haben höchstens 32 gesetzte Bits
        (smaller as u32, greater as u32)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashMap;

    #[test]
    fn test_commutative() {
        let pairs = [(0, 1), (11, 5), (65_535, 65_536), (167_772_161, 3), (u32::MAX, 0)];
        for (i1, i2) in pairs {
            assert_eq!(EdgeKey::new(i1, i2), EdgeKey::new(i2, i1), "({i1}, {i2})");
        }

        let mut rng = rand::rng();
        for _ in 0..1000 {
            let i1: u32 = rng.random();
            let i2: u32 = rng.random();
            assert_eq!(EdgeKey::new(i1, i2), EdgeKey::new(i2, i1));
        }
    }

    #[test]
    fn test_small_indices_layout() {
        // Unterhalb von 2^16 landen nur die unteren Hälften im Schlüssel
        assert_eq!(EdgeKey::new(5, 3).raw(), (3 << 16) | 5);
        assert_eq!(EdgeKey::new(0, 0).raw(), 0);
    }

    #[test]
    fn test_endpoints_roundtrip() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let i1: u32 = rng.random();
            let i2: u32 = rng.random();
            let expected = if i1 < i2 { (i1, i2) } else { (i2, i1) };
            assert_eq!(EdgeKey::new(i1, i2).endpoints(), expected);
        }
        assert_eq!(EdgeKey::new(u32::MAX, 70_000).endpoints(), (70_000, u32::MAX));
    }

    #[test]
    fn test_no_collisions_across_half_boundaries() {
        // Paare, die sich nur in den oberen Hälften unterscheiden, dürfen nicht kollidieren
        let indices = [0, 1, 2, 65_535, 65_536, 65_537, 131_072, 1 << 24, u32::MAX];
        let mut seen: HashMap<EdgeKey, (u32, u32)> = HashMap::new();
        for (n, &i1) in indices.iter().enumerate() {
            for &i2 in &indices[n..] {
                let key = EdgeKey::new(i1, i2);
                if let Some(&previous) = seen.get(&key) {
                    panic!("Kollision: {previous:?} und {:?}", (i1, i2));
                }
                seen.insert(key, (i1, i2));
            }
        }
    }
}

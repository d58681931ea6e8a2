// src/math/types/triangle.rs
use serde::{Deserialize, Serialize};

/// Dreieck als geordnetes Tripel von Vertex-Indizes.
/// Die Reihenfolge (a, b, c) legt die Wicklung und damit die Außenseite fest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Triangle {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub const fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }

    /// Die drei Kanten in Wicklungsreihenfolge: (a, b), (b, c), (c, a).
    pub const fn edges(&self) -> [(u32, u32); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Ein Dreieck ist degeneriert, wenn es einen Index mehrfach enthält.
    pub const fn is_degenerate(&self) -> bool {
        self.a == self.b || self.b == self.c || self.c == self.a
    }
}

impl From<[u32; 3]> for Triangle {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self { a, b, c }
    }
}

impl From<Triangle> for [u32; 3] {
    fn from(t: Triangle) -> Self {
        t.indices()
    }
}

use crate::geometry::{Polygon, Triangle};

/// A contiguous collection of polygons sharing common boundary segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyhedralSurface {
    patches: Vec<Polygon>,
}

impl PolyhedralSurface {
    pub fn new(patches: Vec<Polygon>) -> Self {
        Self { patches }
    }

    pub fn num_patches(&self) -> usize {
        self.patches.len()
    }

    pub fn patch_n(&self, n: usize) -> Option<&Polygon> {
        self.patches.get(n)
    }

    pub fn patches(&self) -> &[Polygon] {
        &self.patches
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.patches
    }
}

/// A triangulated irregular network: a polyhedral surface made only of triangles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tin {
    patches: Vec<Triangle>,
}

impl Tin {
    pub fn new(patches: Vec<Triangle>) -> Self {
        Self { patches }
    }

    pub fn num_patches(&self) -> usize {
        self.patches.len()
    }

    pub fn patch_n(&self, n: usize) -> Option<&Triangle> {
        self.patches.get(n)
    }

    pub fn patches(&self) -> &[Triangle] {
        &self.patches
    }

    pub fn into_inner(self) -> Vec<Triangle> {
        self.patches
    }
}

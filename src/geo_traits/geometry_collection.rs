/// A trait for accessing the members of a collection-like geometry.
pub trait GeometryCollectionTrait {
    type ItemType;

    /// The members of this collection, in order
    fn geometries(&self) -> &[Self::ItemType];

    /// The number of geometries in this collection
    fn num_geometries(&self) -> usize {
        self.geometries().len()
    }

    /// Access to a specified geometry in this collection
    /// Will return None if the provided index is out of bounds
    fn geometry_n(&self, n: usize) -> Option<&Self::ItemType> {
        self.geometries().get(n)
    }
}

use super::position::BlockPos;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    pub fn from_block(position: &BlockPos) -> Self {
        let position = position.0;
        Self {
            min_x: f64::from(position.x),
            min_y: f64::from(position.y),
            min_z: f64::from(position.z),
            max_x: f64::from(position.x) + 1.0,
            max_y: f64::from(position.y) + 1.0,
            max_z: f64::from(position.z) + 1.0,
        }
    }

    pub fn contains_block(&self, position: &BlockPos) -> bool {
        let inner = Self::from_block(position);
        inner.min_x >= self.min_x
            && inner.min_y >= self.min_y
            && inner.min_z >= self.min_z
            && inner.max_x <= self.max_x
            && inner.max_y <= self.max_y
            && inner.max_z <= self.max_z
    }
}

use crate::Vec2;
use std::ops::{Add, Sub};

/// Axis-aligned rectangle. `origin` is the top-left corner, `max()` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T> Rect<T> {
    pub const fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl<T: Add<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn contains(&self, p: Vec2<T>) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x < max.x && p.y >= self.origin.y && p.y < max.y
    }
}

impl<T: Add<Output = T> + Sub<Output = T> + Ord + Copy> Rect<T> {
    /// Intersection of two rectangles, `None` if they don't overlap.
    pub fn intersect(&self, other: &Rect<T>) -> Option<Rect<T>> {
        let min_x = self.origin.x.max(other.origin.x);
        let min_y = self.origin.y.max(other.origin.y);
        let max_x = self.max().x.min(other.max().x);
        let max_y = self.max().y.min(other.max().y);
        if min_x >= max_x || min_y >= max_y {
            return None;
        }
        Some(Rect::new(Vec2::new(min_x, min_y), Vec2::new(max_x - min_x, max_y - min_y)))
    }
}

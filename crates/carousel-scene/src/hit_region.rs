//! Hit regions for mounted elements.
//!
//! Each mounted element owns one rectangle, an optional parent and a
//! stacking order. Hit testing returns the topmost element under a point
//! plus its ancestors, the same set a browser treats as "hovered".

use serde::{Deserialize, Serialize};

use crate::element::ElementId;

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn center(&self) -> [f32; 2] {
        [self.x + self.w * 0.5, self.y + self.h * 0.5]
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

#[derive(Debug, Clone)]
struct HitRegion {
    element: ElementId,
    rect: Rect,
    parent: Option<ElementId>,
    z_index: i32,
    /// Registration order; later wins among equal z.
    order: u64,
}

/// Registry of mounted elements and their hit rectangles.
#[derive(Debug, Default)]
pub struct HitRegionRegistry {
    regions: Vec<HitRegion>,
    next_order: u64,
}

impl HitRegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount an element, or update its rectangle if already mounted.
    pub fn register(&mut self, element: ElementId, rect: Rect, parent: Option<ElementId>) {
        if let Some(region) = self.regions.iter_mut().find(|r| r.element == element) {
            region.rect = rect;
            region.parent = parent;
            return;
        }
        let order = self.next_order;
        self.next_order += 1;
        self.regions.push(HitRegion {
            element,
            rect,
            parent,
            z_index: 0,
            order,
        });
    }

    /// Update the rectangle of a mounted element. Unknown elements are ignored.
    pub fn set_rect(&mut self, element: &ElementId, rect: Rect) {
        if let Some(region) = self.regions.iter_mut().find(|r| &r.element == element) {
            region.rect = rect;
        }
    }

    pub fn set_z_index(&mut self, element: &ElementId, z_index: i32) {
        if let Some(region) = self.regions.iter_mut().find(|r| &r.element == element) {
            region.z_index = z_index;
        }
    }

    /// Unmount an element. Its children keep their regions but lose the link.
    pub fn unregister(&mut self, element: &ElementId) -> bool {
        let before = self.regions.len();
        self.regions.retain(|r| &r.element != element);
        for region in &mut self.regions {
            if region.parent.as_ref() == Some(element) {
                region.parent = None;
            }
        }
        before != self.regions.len()
    }

    pub fn contains(&self, element: &ElementId) -> bool {
        self.regions.iter().any(|r| &r.element == element)
    }

    pub fn rect(&self, element: &ElementId) -> Option<Rect> {
        self.regions
            .iter()
            .find(|r| &r.element == element)
            .map(|r| r.rect)
    }

    /// Topmost element containing the point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&ElementId> {
        self.regions
            .iter()
            .filter(|r| r.rect.contains(x, y))
            .max_by_key(|r| (r.z_index, r.order))
            .map(|r| &r.element)
    }

    /// The hit element followed by its ancestors, innermost first.
    pub fn hover_chain(&self, x: f32, y: f32) -> Vec<ElementId> {
        let mut chain = Vec::new();
        let mut current = self.hit_test(x, y).cloned();
        while let Some(element) = current {
            if chain.contains(&element) {
                break;
            }
            current = self
                .regions
                .iter()
                .find(|r| r.element == element)
                .and_then(|r| r.parent.clone());
            chain.push(element);
        }
        chain
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

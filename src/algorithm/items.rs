//! Search item preparation
//!
//! Expands per-shape counts into one item per physical piece, orders the
//! items, encodes their placements for the problem's container and marks
//! interchangeable neighbours for symmetry breaking.

use std::collections::BTreeMap;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::algorithm::encoder::{EncodedOrientation, encode};
use crate::algorithm::problem::{Container, Problem};
use crate::algorithm::solver::ItemOrder;
use crate::io::error::Result;
use crate::spatial::registry::{ShapeId, ShapeRegistry};

/// One required piece before its placements are encoded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemTemplate {
    /// Shape this piece is an instance of
    pub shape: ShapeId,
    /// 0-based ordinal among the instances of the same shape
    pub instance: usize,
    /// Number of cells the piece covers
    pub area: usize,
}

/// One physical piece ready for the placement search
#[derive(Clone, Debug)]
pub struct SearchItem {
    /// Shape this piece is an instance of
    pub shape: ShapeId,
    /// 0-based ordinal among the instances of the same shape
    pub instance: usize,
    /// Number of cells the piece covers
    pub area: usize,
    /// Candidate placements, one entry per orientation
    ///
    /// Shared between every instance of the same shape in one problem.
    pub orientations: Rc<[EncodedOrientation]>,
    /// Whether the previous item is the same piece geometry
    pub tied_to_previous: bool,
}

/// Expand per-shape counts into one template per required piece
///
/// Templates come out in shape identifier order, instances ascending.
///
/// # Errors
///
/// Returns `UnknownShape` if a positive count names an unregistered shape
pub fn expand_items(problem: &Problem, registry: &ShapeRegistry) -> Result<Vec<ItemTemplate>> {
    let mut items = Vec::with_capacity(problem.item_count());
    for (shape, count) in problem.requested() {
        let area = registry.require(shape, count)?.area();
        items.extend((0..count).map(|instance| ItemTemplate {
            shape,
            instance,
            area,
        }));
    }
    Ok(items)
}

/// Reorder templates according to the configured strategy
///
/// Instance ordinals are renumbered afterwards so they ascend in placement
/// order within each shape.
pub fn order_items(items: &mut [ItemTemplate], order: ItemOrder) {
    match order {
        ItemOrder::AreaDescending => {
            items.sort_by(|a, b| b.area.cmp(&a.area).then(a.shape.cmp(&b.shape)));
        }
        ItemOrder::Given => {}
        ItemOrder::Shuffled(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            items.shuffle(&mut rng);
        }
    }

    let mut next_instance: BTreeMap<ShapeId, usize> = BTreeMap::new();
    for item in items.iter_mut() {
        let counter = next_instance.entry(item.shape).or_default();
        item.instance = *counter;
        *counter += 1;
    }
}

/// Encode placements for every template and mark tied neighbours
///
/// Placements are computed once per distinct shape and shared. An item is
/// tied to its predecessor when both have identical orientation sets, which
/// also covers distinct identifiers that describe the same geometry.
///
/// # Errors
///
/// Returns `UnknownShape` if a template names an unregistered shape
pub fn encode_items(
    templates: &[ItemTemplate],
    registry: &ShapeRegistry,
    container: Container,
) -> Result<Vec<SearchItem>> {
    let mut encoded: BTreeMap<ShapeId, Rc<[EncodedOrientation]>> = BTreeMap::new();
    let mut items: Vec<SearchItem> = Vec::with_capacity(templates.len());
    let mut previous: Option<ShapeId> = None;

    for template in templates {
        let entry = registry.require(template.shape, 1)?;

        let orientations = match encoded.get(&template.shape) {
            Some(cached) => Rc::clone(cached),
            None => {
                let fresh: Rc<[EncodedOrientation]> = entry
                    .orientations()
                    .iter()
                    .map(|orientation| encode(orientation, container))
                    .collect();
                encoded.insert(template.shape, Rc::clone(&fresh));
                fresh
            }
        };

        let tied_to_previous = previous
            .and_then(|id| registry.orientations(id))
            .is_some_and(|prior| prior == entry.orientations());

        items.push(SearchItem {
            shape: template.shape,
            instance: template.instance,
            area: template.area,
            orientations,
            tied_to_previous,
        });
        previous = Some(template.shape);
    }

    tracing::trace!(
        items = items.len(),
        distinct_shapes = encoded.len(),
        placements = encoded
            .values()
            .flat_map(|orientations| orientations.iter())
            .map(|orientation| orientation.placements.len())
            .sum::<usize>(),
        "encoded search items"
    );

    Ok(items)
}

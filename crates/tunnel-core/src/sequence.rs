use crate::shapes::ShapeKind;

/// Ordered tunnel slots, nearest first. Each slot is a handle into the
/// [`ShapeCatalog`](crate::ShapeCatalog).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeSequence {
    slots: Vec<ShapeKind>,
}

impl ShapeSequence {
    /// Spread `primary_count` primary shapes as evenly as possible among
    /// `secondary_count` secondary shapes.
    ///
    /// The sequence is cut into `primary_count + 1` segments. Segment `k`
    /// receives secondaries until the running total reaches
    /// `round((k + 1) * secondary_count / (primary_count + 1))`, then one
    /// primary (except after the last segment). Any shortfall is appended as
    /// trailing secondaries.
    ///
    /// With no primaries at all the result is all secondaries.
    pub fn build(primary_count: usize, secondary_count: usize) -> Self {
        let mut slots = Vec::with_capacity(primary_count + secondary_count);
        let segments = primary_count + 1;
        let mut placed = 0usize;

        for segment in 0..segments {
            let target = round_div((segment + 1) * secondary_count, segments);
            let to_add = target.saturating_sub(placed);
            slots.extend(std::iter::repeat(ShapeKind::Secondary).take(to_add));
            placed += to_add;

            if segment < primary_count {
                slots.push(ShapeKind::Primary);
            }
        }

        if placed < secondary_count {
            slots.extend(std::iter::repeat(ShapeKind::Secondary).take(secondary_count - placed));
        }

        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ShapeKind> {
        self.slots.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.slots.iter().copied()
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.slots.iter().filter(|k| **k == kind).count()
    }

    /// Indices of the primary slots, ascending.
    pub fn primary_positions(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == ShapeKind::Primary)
            .map(|(i, _)| i)
            .collect()
    }
}

// Integer round-half-up of num / den; den > 0.
#[inline]
fn round_div(num: usize, den: usize) -> usize {
    (2 * num + den) / (2 * den)
}

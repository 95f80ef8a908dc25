//! # Celerity tables
//!
//! A celerity table is a non-empty sequence of ([`Degree`], [`KmPerSec`]) calibration
//! samples sorted by ascending distance. Celerity is evaluated as a **step function**
//! of distance: a query resolves to the first node whose distance is greater than or
//! equal to the query (lower-bound semantics), and queries beyond the last node clamp
//! to the last node's celerity. No interpolation between neighboring samples is
//! performed.
//!
//! The built-in IDC 2010 table is available through [`CelerityTable::idc_2010`]
//! without any configuration being loaded.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, KmPerSec};
use crate::infratt_errors::InfrattError;

/// One calibration sample of a celerity model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Geocentric distance in degrees
    pub distance: Degree,
    /// Propagation speed in km/s
    pub celerity: KmPerSec,
}

/// A validated, immutable distance → celerity table.
#[derive(Debug, Clone, PartialEq)]
pub struct CelerityTable {
    nodes: Vec<Node>,
}

/// The hard-coded IDC 2010 infrasound celerity model.
static IDC_2010: Lazy<Arc<CelerityTable>> = Lazy::new(|| {
    Arc::new(CelerityTable {
        nodes: vec![
            Node {
                distance: 0.0,
                celerity: 0.33,
            },
            Node {
                distance: 1.2,
                celerity: 0.295,
            },
            Node {
                distance: 20.0,
                celerity: 0.303,
            },
        ],
    })
});

impl CelerityTable {
    /// Build a table from a node sequence, validating the table invariants.
    ///
    /// Arguments
    /// ---------
    /// * `nodes`: calibration samples, sorted by ascending distance
    ///
    /// Return
    /// ------
    /// * The validated table, or an [`InfrattError`] if the sequence is empty,
    ///   unsorted, or contains a non-positive celerity
    pub fn new(nodes: Vec<Node>) -> Result<Self, InfrattError> {
        if nodes.is_empty() {
            return Err(InfrattError::EmptyTable);
        }
        if !nodes.windows(2).all(|w| w[0].distance <= w[1].distance) {
            return Err(InfrattError::UnsortedDistances);
        }
        if let Some(node) = nodes.iter().find(|n| n.celerity <= 0.0) {
            return Err(InfrattError::NonPositiveCelerity(node.celerity));
        }
        Ok(CelerityTable { nodes })
    }

    /// Build a table from two parallel sample lists, as read from configuration.
    ///
    /// Arguments
    /// ---------
    /// * `distances`: sample distances in degrees, ascending
    /// * `celerities`: one celerity in km/s per distance
    ///
    /// Return
    /// ------
    /// * The validated table, or an [`InfrattError`] if the lists are empty or of
    ///   different lengths, or if the node invariants do not hold
    pub fn from_samples(distances: &[f64], celerities: &[f64]) -> Result<Self, InfrattError> {
        if distances.is_empty() {
            return Err(InfrattError::EmptyTable);
        }
        if distances.len() != celerities.len() {
            return Err(InfrattError::LengthMismatch {
                distances: distances.len(),
                celerities: celerities.len(),
            });
        }

        let nodes = distances
            .iter()
            .zip(celerities)
            .map(|(&distance, &celerity)| Node { distance, celerity })
            .collect();
        CelerityTable::new(nodes)
    }

    /// The shared built-in IDC 2010 table.
    pub fn idc_2010() -> &'static Arc<CelerityTable> {
        &IDC_2010
    }

    /// Look up the celerity applicable at a given distance.
    ///
    /// Lower-bound search: the first node with `distance >= query` wins; queries past
    /// the last node clamp to the last node's celerity.
    pub fn celerity_at(&self, distance: Degree) -> KmPerSec {
        let idx = self
            .nodes
            .partition_point(|node| node.distance < distance)
            .min(self.nodes.len() - 1);
        self.nodes[idx].celerity
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

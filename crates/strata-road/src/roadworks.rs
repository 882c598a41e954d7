//! Roadside decoration and the roadworks state machine.
//!
//! Roadworks are a roadside state. Starting them moves a barren or
//! grass roadside to [`Roadside::GrassRoadWorks`] and anything paved to
//! [`Roadside::PavedRoadWorks`]; the counter then advances once per
//! step until it reports the final stage, and terminating maps the
//! roadside back to grass or paved.

use strata_core::{DecodeError, TileType};
use strata_map::{layout, AsCell, AsCellMut};

use crate::road::RoadTile;

/// Last value of the roadworks counter.
pub const ROADWORKS_FINAL_STAGE: u8 = 15;

/// Decoration beside a road.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Roadside {
    /// Barren land.
    #[default]
    Barren = 0,
    /// Grass.
    Grass = 1,
    /// Paved sidewalks.
    Paved = 2,
    /// Street lights on paved sidewalks.
    StreetLights = 3,
    /// Trees on paved sidewalks.
    Trees = 5,
    /// Roadworks on grass.
    GrassRoadWorks = 6,
    /// Roadworks on paved sidewalks.
    PavedRoadWorks = 7,
}

impl Roadside {
    /// Whether this is one of the two roadworks states.
    pub const fn has_road_works(self) -> bool {
        matches!(self, Roadside::GrassRoadWorks | Roadside::PavedRoadWorks)
    }
}

impl TryFrom<u8> for Roadside {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Roadside::Barren),
            1 => Ok(Roadside::Grass),
            2 => Ok(Roadside::Paved),
            3 => Ok(Roadside::StreetLights),
            5 => Ok(Roadside::Trees),
            6 => Ok(Roadside::GrassRoadWorks),
            7 => Ok(Roadside::PavedRoadWorks),
            _ => Err(DecodeError::InvalidDiscriminant {
                kind: "Roadside",
                value: u32::from(v),
            }),
        }
    }
}

/// Read accessors for the roadside of a road tile.
pub trait RoadsideTile: RoadTile {
    /// Current roadside.
    fn roadside(&self) -> Roadside {
        assert!(self.is_tile_type(TileType::Road), "not a road tile");
        strata_map::common::decode(self.cell().get(layout::road::ROADSIDE))
    }

    /// Whether roadworks are in progress.
    fn has_road_works(&self) -> bool {
        self.roadside().has_road_works()
    }

    /// Progress of the roadworks on a normal road.
    fn roadworks_counter(&self) -> u8 {
        assert!(self.is_normal_road_tile(), "not a normal road tile");
        self.cell().get(layout::road::ROADWORKS_COUNTER) as u8
    }
}

impl<T: AsCell + ?Sized> RoadsideTile for T {}

/// Roadside writes and roadworks transitions.
pub trait RoadsideTileMut: AsCellMut + RoadsideTile {
    /// Change the roadside.
    fn set_roadside(&mut self, side: Roadside) {
        assert!(self.is_tile_type(TileType::Road), "not a road tile");
        self.cell_mut().set(layout::road::ROADSIDE, side as u32);
    }

    /// Begin roadworks.
    ///
    /// # Panics
    ///
    /// Roadworks must not already be in progress.
    fn start_road_works(&mut self) {
        assert!(!self.has_road_works(), "roadworks already in progress");
        let next = match self.roadside() {
            Roadside::Barren | Roadside::Grass => Roadside::GrassRoadWorks,
            _ => Roadside::PavedRoadWorks,
        };
        self.set_roadside(next);
    }

    /// Advance the counter one step. Returns true once the final stage is
    /// reached; the counter stays there until roadworks terminate.
    fn increase_road_works_counter(&mut self) -> bool {
        let next = self
            .roadworks_counter()
            .saturating_add(1)
            .min(ROADWORKS_FINAL_STAGE);
        self.cell_mut()
            .set(layout::road::ROADWORKS_COUNTER, u32::from(next));
        next == ROADWORKS_FINAL_STAGE
    }

    /// End roadworks: grass works become grass, paved works become paved,
    /// and the counter resets.
    ///
    /// # Panics
    ///
    /// Roadworks must be in progress.
    fn terminate_road_works(&mut self) {
        let side = match self.roadside() {
            Roadside::GrassRoadWorks => Roadside::Grass,
            Roadside::PavedRoadWorks => Roadside::Paved,
            _ => panic!("no roadworks in progress"),
        };
        self.set_roadside(side);
        self.cell_mut().set(layout::road::ROADWORKS_COUNTER, 0);
    }
}

impl<T: AsCellMut + ?Sized> RoadsideTileMut for T {}

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Road classification of a way, as tagged by `highway=*`.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    rkyv::Archive,
    rkyv::Serialize,
    rkyv::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HighwayType {
    Motorway,
    MotorwayLink,
    Trunk,
    TrunkLink,
    Primary,
    PrimaryLink,
    Secondary,
    SecondaryLink,
    Tertiary,
    TertiaryLink,
    Unclassified,
    Residential,
    LivingStreet,
    Service,
    Road,
    Track,
}

impl HighwayType {
    pub const ALL: [HighwayType; 16] = [
        HighwayType::Motorway,
        HighwayType::MotorwayLink,
        HighwayType::Trunk,
        HighwayType::TrunkLink,
        HighwayType::Primary,
        HighwayType::PrimaryLink,
        HighwayType::Secondary,
        HighwayType::SecondaryLink,
        HighwayType::Tertiary,
        HighwayType::TertiaryLink,
        HighwayType::Unclassified,
        HighwayType::Residential,
        HighwayType::LivingStreet,
        HighwayType::Service,
        HighwayType::Road,
        HighwayType::Track,
    ];

    /// Assumed average car speed in km/h when the way has no legal speed.
    pub fn default_speed(&self) -> u16 {
        match self {
            HighwayType::Motorway => 120,
            HighwayType::MotorwayLink => 70,
            HighwayType::Trunk => 70,
            HighwayType::TrunkLink => 70,
            HighwayType::Primary => 60,
            HighwayType::PrimaryLink => 60,
            HighwayType::Secondary => 50,
            HighwayType::SecondaryLink => 40,
            HighwayType::Tertiary => 30,
            HighwayType::TertiaryLink => 30,
            HighwayType::Unclassified => 30,
            HighwayType::Residential => 30,
            HighwayType::LivingStreet => 5,
            HighwayType::Service => 20,
            HighwayType::Road => 20,
            HighwayType::Track => 15,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            HighwayType::Motorway => "motorway",
            HighwayType::MotorwayLink => "motorway_link",
            HighwayType::Trunk => "trunk",
            HighwayType::TrunkLink => "trunk_link",
            HighwayType::Primary => "primary",
            HighwayType::PrimaryLink => "primary_link",
            HighwayType::Secondary => "secondary",
            HighwayType::SecondaryLink => "secondary_link",
            HighwayType::Tertiary => "tertiary",
            HighwayType::TertiaryLink => "tertiary_link",
            HighwayType::Unclassified => "unclassified",
            HighwayType::Residential => "residential",
            HighwayType::LivingStreet => "living_street",
            HighwayType::Service => "service",
            HighwayType::Road => "road",
            HighwayType::Track => "track",
        }
    }
}

impl FromStr for HighwayType {
    type Err = String;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        HighwayType::ALL
            .iter()
            .find(|highway| highway.tag() == tag)
            .copied()
            .ok_or_else(|| format!("Unsupported highway type {tag}"))
    }
}

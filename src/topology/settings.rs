//! Connection mode and style selection

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::topology::ConnectionMode;

/// How a consumer draws a connection. Does not affect which pairs exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStyle {
    #[default]
    Arc,
    Straight,
}

impl ConnectionStyle {
    pub fn toggled(self) -> Self {
        match self {
            ConnectionStyle::Arc => ConnectionStyle::Straight,
            ConnectionStyle::Straight => ConnectionStyle::Arc,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ConnectionSettings {
    pub mode: ConnectionMode,
    pub style: ConnectionStyle,
}

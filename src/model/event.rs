use serde::{Deserialize, Serialize};

/// Change notifications queued by `ViewerState`, keyed like the viewer's own
/// visibility-and-grouping update events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityEvent {
    CurrentSourceChanged,
    CurrentGroupChanged,
    SourceActivityChanged,
    GroupActivityChanged,
    DisplayModeChanged,
    SourceToGroupAssignmentChanged,
    GroupNameChanged,
    NumSourcesChanged,
    NumGroupsChanged,
    InterpolationChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Single,
    #[default]
    Fused,
    Group,
    FusedGroup,
}

impl DisplayMode {
    pub fn from_flags(grouping: bool, fused: bool) -> Self {
        match (grouping, fused) {
            (false, false) => Self::Single,
            (false, true) => Self::Fused,
            (true, false) => Self::Group,
            (true, true) => Self::FusedGroup,
        }
    }

    pub fn is_grouping(self) -> bool {
        matches!(self, Self::Group | Self::FusedGroup)
    }

    pub fn is_fused(self) -> bool {
        matches!(self, Self::Fused | Self::FusedGroup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    NearestNeighbor,
    #[serde(alias = "linear")]
    NLinear,
}

impl Interpolation {
    pub fn toggled(self) -> Self {
        match self {
            Self::NearestNeighbor => Self::NLinear,
            Self::NLinear => Self::NearestNeighbor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NearestNeighbor => "Nearest Neighbor",
            Self::NLinear => "N-Linear",
        }
    }
}

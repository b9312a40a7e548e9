#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableTier {
    Low,
    Medium,
    High,
}

impl RenderableTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderableTier::Low => "LOW",
            RenderableTier::Medium => "MEDIUM",
            RenderableTier::High => "HIGH",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Approved,
    Conditional,
    Blocked,
}

impl RenderableStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderableStatus::Approved => "APPROVED",
            RenderableStatus::Conditional => "CONDITIONAL",
            RenderableStatus::Blocked => "BLOCKED",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableDimension {
    /// Display name, e.g. `Segurança`.
    pub name: String,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableObservation {
    pub dimension: String,
    pub criterion: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub application_name: String,
    pub version: String,
    pub evaluation_date: String,
    pub total_score: f64,
    pub tier: RenderableTier,
    pub status: RenderableStatus,
    pub vetoes: Vec<String>,
    /// In canonical dimension order.
    pub dimensions: Vec<RenderableDimension>,
    pub observations: Vec<RenderableObservation>,
}

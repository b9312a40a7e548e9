//! The fixed scoring schema: dimension weights, criterion weights, and thresholds.
//!
//! The tables are compile-time constants. [`dimension_weight`] and [`criterion_spec`]
//! are exhaustive over the closed key sets, so every lookup the scorer makes is total.
//! [`Schema`] is a read-only view over the tables used for validation and explanation.

use riskgate_types::{Criterion, Dimension};
use thiserror::Error;

/// Allowed drift when checking that weights sum to 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Classification result for a single criterion value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl RiskLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn score(self) -> f64 {
        f64::from(self.as_u8())
    }
}

/// Boundary pair plus direction flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    pub low_bound: f64,
    pub medium_bound: f64,
    /// `true` when a higher value means lower risk.
    pub inverted: bool,
}

impl Threshold {
    pub const fn lower_is_better(low_bound: f64, medium_bound: f64) -> Self {
        Self {
            low_bound,
            medium_bound,
            inverted: false,
        }
    }

    pub const fn higher_is_better(low_bound: f64, medium_bound: f64) -> Self {
        Self {
            low_bound,
            medium_bound,
            inverted: true,
        }
    }

    pub fn classify(&self, value: f64) -> RiskLevel {
        if self.inverted {
            if value >= self.low_bound {
                RiskLevel::Low
            } else if value >= self.medium_bound {
                RiskLevel::Medium
            } else {
                RiskLevel::High
            }
        } else if value <= self.low_bound {
            RiskLevel::Low
        } else if value <= self.medium_bound {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionSpec {
    pub dimension: Dimension,
    pub weight: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriterionSpec {
    pub criterion: Criterion,
    /// Weight within the criterion's dimension.
    pub weight: f64,
    pub threshold: Threshold,
}

pub const fn dimension_weight(dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Bugs => 0.25,
        Dimension::Performance => 0.25,
        Dimension::Security => 0.30,
        Dimension::Experience => 0.20,
    }
}

pub const fn criterion_spec(criterion: Criterion) -> CriterionSpec {
    use Criterion::*;
    let (weight, threshold) = match criterion {
        DensidadeDefeitos => (0.25, Threshold::lower_is_better(2.0, 5.0)),
        CoberturaTestes => (0.20, Threshold::higher_is_better(90.0, 70.0)),
        BugsCriticos => (0.30, Threshold::lower_is_better(0.0, 2.0)),
        TaxaRegressao => (0.15, Threshold::lower_is_better(1.0, 3.0)),
        Mtbf => (0.10, Threshold::higher_is_better(720.0, 168.0)),

        TempoResposta => (0.25, Threshold::lower_is_better(300.0, 800.0)),
        Percentil95 => (0.25, Threshold::lower_is_better(800.0, 2000.0)),
        UtilizacaoRecursos => (0.15, Threshold::lower_is_better(60.0, 85.0)),
        Escalabilidade => (0.15, Threshold::lower_is_better(10.0, 30.0)),
        TempoInicializacao => (0.05, Threshold::lower_is_better(5.0, 15.0)),
        Throughput => (0.15, Threshold::higher_is_better(100.0, 50.0)),

        VulnerabilidadesCriticas => (0.30, Threshold::lower_is_better(0.0, 1.0)),
        VulnerabilidadesTotais => (0.20, Threshold::lower_is_better(5.0, 15.0)),
        OwaspTop10 => (0.20, Threshold::higher_is_better(100.0, 90.0)),
        SegurancaDados => (0.15, Threshold::higher_is_better(100.0, 95.0)),
        // Medium bound below the low bound: level 2 is unreachable for these two.
        AutenticacaoAutorizacao => (0.10, Threshold::lower_is_better(2.0, 1.0)),
        Pentest => (0.05, Threshold::lower_is_better(2.0, 1.0)),

        SatisfacaoUsuario => (0.25, Threshold::higher_is_better(70.0, 40.0)),
        TaxaErroUsuario => (0.20, Threshold::lower_is_better(2.0, 5.0)),
        TempoConclusaoTarefa => (0.15, Threshold::lower_is_better(10.0, 30.0)),
        Acessibilidade => (0.10, Threshold::higher_is_better(95.0, 80.0)),
        TaxaAbandono => (0.15, Threshold::lower_is_better(5.0, 15.0)),
        AdocaoFuncionalidades => (0.15, Threshold::higher_is_better(60.0, 30.0)),
    };
    CriterionSpec {
        criterion,
        weight,
        threshold,
    }
}

const BUILTIN_DIMENSIONS: [DimensionSpec; 4] = {
    let mut out = [DimensionSpec {
        dimension: Dimension::Bugs,
        weight: 0.0,
    }; 4];
    let mut i = 0;
    while i < Dimension::ALL.len() {
        let dimension = Dimension::ALL[i];
        out[i] = DimensionSpec {
            dimension,
            weight: dimension_weight(dimension),
        };
        i += 1;
    }
    out
};

const BUILTIN_CRITERIA: [CriterionSpec; 23] = {
    let mut out = [criterion_spec(Criterion::ALL[0]); 23];
    let mut i = 0;
    while i < Criterion::ALL.len() {
        out[i] = criterion_spec(Criterion::ALL[i]);
        i += 1;
    }
    out
};

static BUILTIN: Schema<'static> = Schema::new(&BUILTIN_DIMENSIONS, &BUILTIN_CRITERIA);

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("dimension weights sum to {sum}, expected 1.0")]
    DimensionWeightSum { sum: f64 },
    #[error("criterion weights of dimension '{dimension}' sum to {sum}, expected 1.0")]
    CriterionWeightSum { dimension: Dimension, sum: f64 },
    #[error("weight for '{key}' must be finite and non-negative, got {weight}")]
    InvalidWeight { key: &'static str, weight: f64 },
    #[error("dimension '{0}' is listed more than once")]
    DuplicateDimension(Dimension),
    #[error("dimension '{0}' has no weight")]
    MissingDimension(Dimension),
    #[error("criterion '{0}' is listed more than once")]
    DuplicateCriterion(Criterion),
    #[error("criterion '{0}' has no weight or threshold")]
    MissingCriterion(Criterion),
}

/// Read-only view over weight and threshold tables.
#[derive(Clone, Copy, Debug)]
pub struct Schema<'a> {
    dimensions: &'a [DimensionSpec],
    criteria: &'a [CriterionSpec],
}

impl<'a> Schema<'a> {
    pub const fn new(dimensions: &'a [DimensionSpec], criteria: &'a [CriterionSpec]) -> Self {
        Self {
            dimensions,
            criteria,
        }
    }

    pub fn dimensions(&self) -> &'a [DimensionSpec] {
        self.dimensions
    }

    pub fn criteria(&self) -> &'a [CriterionSpec] {
        self.criteria
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&'a DimensionSpec> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }

    pub fn criterion(&self, criterion: Criterion) -> Option<&'a CriterionSpec> {
        self.criteria.iter().find(|c| c.criterion == criterion)
    }

    pub fn criteria_in(&self, dimension: Dimension) -> impl Iterator<Item = &'a CriterionSpec> {
        self.criteria
            .iter()
            .filter(move |c| c.criterion.dimension() == dimension)
    }

    /// Check completeness and weight sums. Run once at startup.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for d in Dimension::ALL {
            match self.dimensions.iter().filter(|s| s.dimension == d).count() {
                0 => return Err(SchemaError::MissingDimension(d)),
                1 => {}
                _ => return Err(SchemaError::DuplicateDimension(d)),
            }
        }
        for c in Criterion::ALL {
            match self.criteria.iter().filter(|s| s.criterion == c).count() {
                0 => return Err(SchemaError::MissingCriterion(c)),
                1 => {}
                _ => return Err(SchemaError::DuplicateCriterion(c)),
            }
        }

        for spec in self.dimensions {
            check_weight(spec.dimension.key(), spec.weight)?;
        }
        for spec in self.criteria {
            check_weight(spec.criterion.key(), spec.weight)?;
        }

        let sum: f64 = self.dimensions.iter().map(|d| d.weight).sum();
        if !weights_sum_to_one(sum) {
            return Err(SchemaError::DimensionWeightSum { sum });
        }

        for d in Dimension::ALL {
            let sum: f64 = self.criteria_in(d).map(|c| c.weight).sum();
            if !weights_sum_to_one(sum) {
                return Err(SchemaError::CriterionWeightSum { dimension: d, sum });
            }
        }

        Ok(())
    }
}

impl Schema<'static> {
    /// The process-wide schema the scorer uses.
    pub fn builtin() -> &'static Schema<'static> {
        &BUILTIN
    }
}

fn check_weight(key: &'static str, weight: f64) -> Result<(), SchemaError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(SchemaError::InvalidWeight { key, weight })
    }
}

fn weights_sum_to_one(sum: f64) -> bool {
    (sum - 1.0).abs() <= WEIGHT_TOLERANCE
}

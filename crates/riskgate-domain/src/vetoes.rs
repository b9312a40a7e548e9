//! Hard blocking conditions that override the weighted score.

use riskgate_types::{Criterion, Dimension, ObservationSet, ids};

/// Automated vetoes, declared in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Veto {
    CriticalVulnerability,
    P95Latency,
    CriticalBugs,
    ProductionErrorRate,
}

struct Rule {
    dimension: Dimension,
    criterion: Criterion,
    /// Triggers when the value is strictly greater than this.
    limit: f64,
    /// Value assumed when the observation is absent.
    default: f64,
}

impl Rule {
    fn triggered(&self, observations: &ObservationSet) -> bool {
        observations
            .get(self.dimension, self.criterion)
            .unwrap_or(self.default)
            > self.limit
    }
}

impl Veto {
    pub const ALL: [Veto; 4] = [
        Veto::CriticalVulnerability,
        Veto::P95Latency,
        Veto::CriticalBugs,
        Veto::ProductionErrorRate,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Veto::CriticalVulnerability => ids::VETO_CRITICAL_VULNERABILITY,
            Veto::P95Latency => ids::VETO_P95_LATENCY,
            Veto::CriticalBugs => ids::VETO_CRITICAL_BUGS,
            Veto::ProductionErrorRate => ids::VETO_PRODUCTION_ERROR_RATE,
        }
    }

    /// Text recorded in `triggered_vetoes`.
    pub fn description(self) -> &'static str {
        match self {
            Veto::CriticalVulnerability => "Vulnerabilidade crítica de segurança não mitigada",
            Veto::P95Latency => "Tempo de resposta P95 > 3000ms em operações críticas",
            Veto::CriticalBugs => "Bugs que impedem fluxo principal do cliente",
            Veto::ProductionErrorRate => "Taxa de erro em produção >1% para operações críticas",
        }
    }

    fn rule(self) -> Rule {
        let (criterion, limit) = match self {
            Veto::CriticalVulnerability => (Criterion::VulnerabilidadesCriticas, 0.0),
            Veto::P95Latency => (Criterion::Percentil95, 3000.0),
            Veto::CriticalBugs => (Criterion::BugsCriticos, 0.0),
            Veto::ProductionErrorRate => (Criterion::TaxaErroUsuario, 1.0),
        };
        Rule {
            dimension: criterion.dimension(),
            criterion,
            limit,
            default: 0.0,
        }
    }

    pub fn is_triggered(self, observations: &ObservationSet) -> bool {
        self.rule().triggered(observations)
    }
}

/// Every triggered veto, in declaration order. Absent observations never trigger.
pub fn evaluate_vetoes(observations: &ObservationSet) -> Vec<Veto> {
    Veto::ALL
        .into_iter()
        .filter(|veto| veto.is_triggered(observations))
        .collect()
}

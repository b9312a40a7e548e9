use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Top-level risk category.
///
/// Ordering is the canonical report order: bugs, performance, security, experience.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Bugs,
    Performance,
    Security,
    Experience,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Bugs,
        Dimension::Performance,
        Dimension::Security,
        Dimension::Experience,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Dimension::Bugs => "bugs",
            Dimension::Performance => "performance",
            Dimension::Security => "security",
            Dimension::Experience => "experience",
        }
    }

    /// Name shown in the console summary and used as the spreadsheet label.
    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::Bugs => "Bugs",
            Dimension::Performance => "Performance",
            Dimension::Security => "Segurança",
            Dimension::Experience => "Experiência",
        }
    }

    pub fn from_key(key: &str) -> Option<Dimension> {
        Dimension::ALL.into_iter().find(|d| d.key() == key)
    }

    pub fn criteria(self) -> impl Iterator<Item = Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(move |c| c.dimension() == self)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A measurable metric. Each criterion belongs to exactly one [`Dimension`].
///
/// Serialized keys are the stable snake_case identifiers used in reports
/// (`bugs_criticos`, `percentil_95`, ...).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    // bugs
    DensidadeDefeitos,
    CoberturaTestes,
    BugsCriticos,
    TaxaRegressao,
    Mtbf,
    // performance
    TempoResposta,
    #[serde(rename = "percentil_95")]
    Percentil95,
    UtilizacaoRecursos,
    Escalabilidade,
    TempoInicializacao,
    Throughput,
    // security
    VulnerabilidadesCriticas,
    VulnerabilidadesTotais,
    OwaspTop10,
    SegurancaDados,
    AutenticacaoAutorizacao,
    Pentest,
    // experience
    SatisfacaoUsuario,
    TaxaErroUsuario,
    TempoConclusaoTarefa,
    Acessibilidade,
    TaxaAbandono,
    AdocaoFuncionalidades,
}

impl Criterion {
    pub const ALL: [Criterion; 23] = [
        Criterion::DensidadeDefeitos,
        Criterion::CoberturaTestes,
        Criterion::BugsCriticos,
        Criterion::TaxaRegressao,
        Criterion::Mtbf,
        Criterion::TempoResposta,
        Criterion::Percentil95,
        Criterion::UtilizacaoRecursos,
        Criterion::Escalabilidade,
        Criterion::TempoInicializacao,
        Criterion::Throughput,
        Criterion::VulnerabilidadesCriticas,
        Criterion::VulnerabilidadesTotais,
        Criterion::OwaspTop10,
        Criterion::SegurancaDados,
        Criterion::AutenticacaoAutorizacao,
        Criterion::Pentest,
        Criterion::SatisfacaoUsuario,
        Criterion::TaxaErroUsuario,
        Criterion::TempoConclusaoTarefa,
        Criterion::Acessibilidade,
        Criterion::TaxaAbandono,
        Criterion::AdocaoFuncionalidades,
    ];

    pub fn dimension(self) -> Dimension {
        use Criterion::*;
        match self {
            DensidadeDefeitos | CoberturaTestes | BugsCriticos | TaxaRegressao | Mtbf => {
                Dimension::Bugs
            }
            TempoResposta | Percentil95 | UtilizacaoRecursos | Escalabilidade
            | TempoInicializacao | Throughput => Dimension::Performance,
            VulnerabilidadesCriticas | VulnerabilidadesTotais | OwaspTop10 | SegurancaDados
            | AutenticacaoAutorizacao | Pentest => Dimension::Security,
            SatisfacaoUsuario | TaxaErroUsuario | TempoConclusaoTarefa | Acessibilidade
            | TaxaAbandono | AdocaoFuncionalidades => Dimension::Experience,
        }
    }

    pub fn key(self) -> &'static str {
        use Criterion::*;
        match self {
            DensidadeDefeitos => "densidade_defeitos",
            CoberturaTestes => "cobertura_testes",
            BugsCriticos => "bugs_criticos",
            TaxaRegressao => "taxa_regressao",
            Mtbf => "mtbf",
            TempoResposta => "tempo_resposta",
            Percentil95 => "percentil_95",
            UtilizacaoRecursos => "utilizacao_recursos",
            Escalabilidade => "escalabilidade",
            TempoInicializacao => "tempo_inicializacao",
            Throughput => "throughput",
            VulnerabilidadesCriticas => "vulnerabilidades_criticas",
            VulnerabilidadesTotais => "vulnerabilidades_totais",
            OwaspTop10 => "owasp_top10",
            SegurancaDados => "seguranca_dados",
            AutenticacaoAutorizacao => "autenticacao_autorizacao",
            Pentest => "pentest",
            SatisfacaoUsuario => "satisfacao_usuario",
            TaxaErroUsuario => "taxa_erro_usuario",
            TempoConclusaoTarefa => "tempo_conclusao_tarefa",
            Acessibilidade => "acessibilidade",
            TaxaAbandono => "taxa_abandono",
            AdocaoFuncionalidades => "adocao_funcionalidades",
        }
    }

    /// Human-facing label, as it appears in the quality spreadsheet.
    pub fn label(self) -> &'static str {
        use Criterion::*;
        match self {
            DensidadeDefeitos => "Densidade de defeitos",
            CoberturaTestes => "Cobertura de testes",
            BugsCriticos => "Bugs críticos pendentes",
            TaxaRegressao => "Taxa de regressão",
            Mtbf => "MTBF",
            TempoResposta => "Tempo de resposta",
            Percentil95 => "Percentil 95 de tempo de resposta",
            UtilizacaoRecursos => "Utilização de recursos",
            Escalabilidade => "Escalabilidade",
            TempoInicializacao => "Tempo de inicialização",
            Throughput => "Throughput",
            VulnerabilidadesCriticas => "Vulnerabilidades críticas",
            VulnerabilidadesTotais => "Vulnerabilidades totais",
            OwaspTop10 => "OWASP Top 10",
            SegurancaDados => "Segurança de dados",
            AutenticacaoAutorizacao => "Autenticação/Autorização",
            Pentest => "Pentest",
            SatisfacaoUsuario => "Satisfação do usuário",
            TaxaErroUsuario => "Taxa de erro do usuário",
            TempoConclusaoTarefa => "Tempo de conclusão de tarefa",
            Acessibilidade => "Acessibilidade",
            TaxaAbandono => "Taxa de abandono",
            AdocaoFuncionalidades => "Adoção de funcionalidades",
        }
    }

    /// Unit of the raw value, for explanations.
    pub fn unit(self) -> &'static str {
        use Criterion::*;
        match self {
            DensidadeDefeitos => "defects per KLOC",
            CoberturaTestes | UtilizacaoRecursos | OwaspTop10 | SegurancaDados | TaxaErroUsuario
            | Acessibilidade | TaxaAbandono | AdocaoFuncionalidades | TaxaRegressao
            | Escalabilidade => "%",
            BugsCriticos | VulnerabilidadesCriticas | VulnerabilidadesTotais => "count",
            Mtbf => "hours",
            TempoResposta | Percentil95 => "ms",
            TempoInicializacao | TempoConclusaoTarefa => "s",
            Throughput => "transactions/s",
            AutenticacaoAutorizacao => "level (2=complete, 1=partial, 0=minimal)",
            Pentest => "level (2=no critical findings, 1=medium risk, 0=high risk)",
            SatisfacaoUsuario => "score 0-100",
        }
    }

    pub fn from_key(key: &str) -> Option<Criterion> {
        Criterion::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw metric values grouped by dimension.
///
/// A criterion stored under a dimension it does not belong to is kept verbatim
/// (it is part of the raw input) but is never scored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ObservationSet(BTreeMap<Dimension, BTreeMap<Criterion, f64>>);

impl ObservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `dimension`, replacing any previous value.
    pub fn insert(&mut self, dimension: Dimension, criterion: Criterion, value: f64) {
        self.0.entry(dimension).or_default().insert(criterion, value);
    }

    /// Store `value` under the criterion's own dimension.
    pub fn record(&mut self, criterion: Criterion, value: f64) {
        self.insert(criterion.dimension(), criterion, value);
    }

    pub fn with(mut self, criterion: Criterion, value: f64) -> Self {
        self.record(criterion, value);
        self
    }

    pub fn get(&self, dimension: Dimension, criterion: Criterion) -> Option<f64> {
        self.0.get(&dimension)?.get(&criterion).copied()
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&BTreeMap<Criterion, f64>> {
        self.0.get(&dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &BTreeMap<Criterion, f64>)> {
        self.0.iter().map(|(d, m)| (*d, m))
    }

    /// Number of stored values across all dimensions.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(Criterion, f64)> for ObservationSet {
    fn from_iter<I: IntoIterator<Item = (Criterion, f64)>>(iter: I) -> Self {
        let mut set = ObservationSet::new();
        for (criterion, value) in iter {
            set.record(criterion, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dimension_has_criteria() {
        for d in Dimension::ALL {
            assert!(d.criteria().count() >= 5, "{d} has too few criteria");
        }
        let total: usize = Dimension::ALL.iter().map(|d| d.criteria().count()).sum();
        assert_eq!(total, Criterion::ALL.len());
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for c in Criterion::ALL {
            assert_eq!(Criterion::from_key(c.key()), Some(c));
        }
        for d in Dimension::ALL {
            assert_eq!(Dimension::from_key(d.key()), Some(d));
        }
        assert_eq!(Criterion::from_key("unknown"), None);
        assert_eq!(Dimension::from_key("seguranca"), None);
    }

    #[test]
    fn serde_keys_match_stable_keys() {
        for c in Criterion::ALL {
            let json = serde_json::to_value(c).expect("serialize criterion");
            assert_eq!(json, serde_json::Value::String(c.key().to_string()));
        }
        for d in Dimension::ALL {
            let json = serde_json::to_value(d).expect("serialize dimension");
            assert_eq!(json, serde_json::Value::String(d.key().to_string()));
        }
    }

    #[test]
    fn observation_set_serializes_as_nested_map() {
        let set = ObservationSet::new()
            .with(Criterion::Percentil95, 500.0)
            .with(Criterion::BugsCriticos, 0.0);

        let json = serde_json::to_value(&set).expect("serialize");
        assert_eq!(json["performance"]["percentil_95"], 500.0);
        assert_eq!(json["bugs"]["bugs_criticos"], 0.0);

        let back: ObservationSet = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, set);
    }

    #[test]
    fn insert_keeps_misplaced_criteria_verbatim() {
        let mut set = ObservationSet::new();
        set.insert(Dimension::Bugs, Criterion::Throughput, 10.0);
        assert_eq!(set.get(Dimension::Bugs, Criterion::Throughput), Some(10.0));
        assert_eq!(set.get(Dimension::Performance, Criterion::Throughput), None);
        assert_eq!(set.len(), 1);
    }
}

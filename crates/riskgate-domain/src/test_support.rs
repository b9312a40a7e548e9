//! Shared observation builders for domain tests.

use riskgate_types::{Criterion, ObservationSet};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn evaluated_at() -> OffsetDateTime {
    datetime!(2026-10-19 12:00 UTC)
}

/// Every criterion present and classified as low risk.
pub fn low_risk() -> ObservationSet {
    use Criterion::*;
    [
        (DensidadeDefeitos, 1.0),
        (CoberturaTestes, 95.0),
        (BugsCriticos, 0.0),
        (TaxaRegressao, 0.5),
        (Mtbf, 1000.0),
        (TempoResposta, 200.0),
        (Percentil95, 500.0),
        (UtilizacaoRecursos, 50.0),
        (Escalabilidade, 5.0),
        (TempoInicializacao, 2.0),
        (Throughput, 200.0),
        (VulnerabilidadesCriticas, 0.0),
        (VulnerabilidadesTotais, 2.0),
        (OwaspTop10, 100.0),
        (SegurancaDados, 100.0),
        (AutenticacaoAutorizacao, 0.0),
        (Pentest, 0.0),
        (SatisfacaoUsuario, 90.0),
        (TaxaErroUsuario, 0.5),
        (TempoConclusaoTarefa, 5.0),
        (Acessibilidade, 98.0),
        (TaxaAbandono, 2.0),
        (AdocaoFuncionalidades, 80.0),
    ]
    .into_iter()
    .collect()
}

/// Reference release with values at the low-risk boundaries
/// (`autenticacao_autorizacao = 2`, `pentest = 2`, `throughput = 150`).
pub fn reference_release() -> ObservationSet {
    use Criterion::*;
    [
        (VulnerabilidadesCriticas, 0.0),
        (VulnerabilidadesTotais, 2.0),
        (OwaspTop10, 100.0),
        (SegurancaDados, 100.0),
        (AutenticacaoAutorizacao, 2.0),
        (Pentest, 2.0),
        (DensidadeDefeitos, 1.0),
        (CoberturaTestes, 95.0),
        (BugsCriticos, 0.0),
        (TaxaRegressao, 0.5),
        (Mtbf, 1000.0),
        (TempoResposta, 200.0),
        (Percentil95, 500.0),
        (UtilizacaoRecursos, 50.0),
        (Escalabilidade, 5.0),
        (TempoInicializacao, 3.0),
        (Throughput, 150.0),
        (SatisfacaoUsuario, 85.0),
        (TaxaErroUsuario, 0.5),
        (TempoConclusaoTarefa, 5.0),
        (Acessibilidade, 98.0),
        (TaxaAbandono, 2.0),
        (AdocaoFuncionalidades, 70.0),
    ]
    .into_iter()
    .collect()
}

/// High weighted score while staying under every veto limit.
pub fn high_risk() -> ObservationSet {
    use Criterion::*;
    [
        (DensidadeDefeitos, 10.0),
        (CoberturaTestes, 50.0),
        (BugsCriticos, 0.0),
        (TaxaRegressao, 5.0),
        (Mtbf, 100.0),
        (TempoResposta, 1000.0),
        (Percentil95, 2500.0),
        (UtilizacaoRecursos, 95.0),
        (Escalabilidade, 40.0),
        (TempoInicializacao, 20.0),
        (Throughput, 10.0),
        (VulnerabilidadesCriticas, 0.0),
        (VulnerabilidadesTotais, 20.0),
        (OwaspTop10, 80.0),
        (SegurancaDados, 90.0),
        (AutenticacaoAutorizacao, 3.0),
        (Pentest, 3.0),
        (SatisfacaoUsuario, 30.0),
        (TaxaErroUsuario, 1.0),
        (TempoConclusaoTarefa, 40.0),
        (Acessibilidade, 70.0),
        (TaxaAbandono, 20.0),
        (AdocaoFuncionalidades, 20.0),
    ]
    .into_iter()
    .collect()
}

use serde::Serialize;

/// Output column names, in the exact order they appear in the
/// spreadsheet and in JSON output.
pub const COLUMNS: [&str; 12] = [
    "unidade",
    "empreendimento",
    "cliente",
    "data_contrato",
    "valor_contrato",
    "comissao",
    "porcentagem",
    "imobiliaria",
    "data_pag_sinal",
    "forma_pagamento",
    "valor_tabela",
    "valor_sinal",
];

/// One flattened reservation. Monetary pass-through fields keep the
/// string form the API serves them in; aggregated commission totals
/// are numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationRow {
    pub unidade: Option<String>,
    pub empreendimento: Option<String>,
    pub cliente: Option<String>,
    pub data_contrato: Option<String>,
    pub valor_contrato: Option<String>,
    pub comissao: f64,
    pub porcentagem: f64,
    pub imobiliaria: Option<String>,
    pub data_pag_sinal: Option<String>,
    pub forma_pagamento: String,
    pub valor_tabela: Option<String>,
    pub valor_sinal: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: u32,
    pub nome: &'static str,
}

/// Known empreendimentos. The CRM has no listing endpoint for these,
/// so the catalog is maintained by hand.
pub const PROJECTS: &[Project] = &[
    Project { id: 26, nome: "ONE VIEW LUXEMBURGO" },
    Project { id: 25, nome: "CARBON" },
    Project { id: 24, nome: "AURA" },
    Project { id: 23, nome: "Terras de Minas" },
    Project { id: 22, nome: "JADE" },
    Project { id: 21, nome: "SION" },
    Project { id: 20, nome: "Campo das Aroeiras" },
    Project { id: 19, nome: "JARDINS 156" },
    Project { id: 18, nome: "Empreendimentos Antigos" },
    Project { id: 17, nome: "MARTIM 440" },
    Project { id: 16, nome: "Terras Altas" },
    Project { id: 11, nome: "Valle da Serra" },
    Project { id: 10, nome: "Três Rios" },
    Project { id: 9, nome: "Savassi 1022" },
    Project { id: 8, nome: "Santo Agostinho" },
    Project { id: 7, nome: "Reserva Piedade" },
    Project { id: 6, nome: "EDIFÍCIO LOURDES 1580" },
    Project { id: 5, nome: "Gran Royalle Casa Branca" },
    Project { id: 4, nome: "Funcionários Lifestyle" },
    Project { id: 3, nome: "Eco Casa Branca" },
    Project { id: 2, nome: "ALVARENGA, 594" },
];

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_order_is_fixed() {
        assert_eq!(
            COLUMNS,
            [
                "unidade",
                "empreendimento",
                "cliente",
                "data_contrato",
                "valor_contrato",
                "comissao",
                "porcentagem",
                "imobiliaria",
                "data_pag_sinal",
                "forma_pagamento",
                "valor_tabela",
                "valor_sinal",
            ]
        );
    }

    #[test]
    fn catalog_lookup() {
        assert_eq!(find_project(26).map(|p| p.nome), Some("ONE VIEW LUXEMBURGO"));
        assert_eq!(find_project(2).map(|p| p.nome), Some("ALVARENGA, 594"));
        assert!(find_project(1).is_none());
    }
}

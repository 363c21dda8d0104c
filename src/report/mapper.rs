use serde_json::Value;

use crate::report::models::ReservationRow;

/// Category label that marks the down-payment installment.
const DOWN_PAYMENT_SERIE: &str = "Sinal";

/// Flatten a raw reservations payload into normalized rows, one per
/// proposal record. A list payload iterates its elements, a mapping
/// payload iterates its values; anything else yields zero rows.
pub fn map_to_rows(payload: &Value) -> Vec<ReservationRow> {
    match payload {
        Value::Array(records) => records.iter().map(map_record).collect(),
        Value::Object(records) => records.values().map(map_record).collect(),
        _ => Vec::new(),
    }
}

fn map_record(proposta: &Value) -> ReservationRow {
    let unidade_info = proposta.get("unidade");
    let titular_info = proposta.get("titular");
    let condicoes_info = proposta.get("condicoes");

    let series = condicoes_info
        .and_then(|c| c.get("series"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let (valor_sinal, data_pag_sinal) = down_payment(series);
    let forma_pagamento = format!("{} parcelas", installment_count(series));

    let commissions = aggregate_commissions(proposta.get("comissoes"));
    let imobiliaria = if commissions.imobiliarias.is_empty() {
        None
    } else {
        Some(commissions.imobiliarias.join(", "))
    };

    // The contract date falls back to the sale date when missing OR
    // empty; the upstream sometimes serves an empty data_contrato on
    // records sold before contract signing.
    let data_contrato = field_str(proposta.get("data_contrato"))
        .filter(|s| !s.is_empty())
        .or_else(|| field_str(proposta.get("data_venda")));

    ReservationRow {
        unidade: field_str(unidade_info.and_then(|u| u.get("unidade"))),
        empreendimento: field_str(unidade_info.and_then(|u| u.get("empreendimento"))),
        cliente: field_str(titular_info.and_then(|t| t.get("nome"))),
        data_contrato,
        valor_contrato: field_str(condicoes_info.and_then(|c| c.get("valor_contrato"))),
        comissao: commissions.valor,
        porcentagem: commissions.porcentagem,
        imobiliaria,
        data_pag_sinal,
        forma_pagamento,
        valor_tabela: field_str(condicoes_info.and_then(|c| c.get("vpl_reserva"))),
        valor_sinal,
    }
}

/// First installment labeled "Sinal" wins; later ones are ignored.
/// Returns (amount, due date), both null when no entry matches.
fn down_payment(series: &[Value]) -> (Option<f64>, Option<String>) {
    for parcela in series {
        if parcela.get("serie").and_then(Value::as_str) == Some(DOWN_PAYMENT_SERIE) {
            return (
                parse_decimal(parcela.get("valor")),
                field_str(parcela.get("vencimento")),
            );
        }
    }
    (None, None)
}

/// Sums `quantidade` over every installment entry, starting at -1.
/// Missing, null or empty counts contribute zero; non-numeric counts
/// leave the accumulator untouched. The total may stay negative when
/// no entry carries a count.
fn installment_count(series: &[Value]) -> i64 {
    let mut total: i64 = -1;
    for parcela in series {
        match parcela.get("quantidade") {
            Some(Value::Number(n)) => {
                total += n
                    .as_i64()
                    .or_else(|| n.as_f64().map(|f| f as i64))
                    .unwrap_or(0);
            }
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    continue;
                }
                if let Ok(n) = s.parse::<i64>() {
                    total += n;
                }
            }
            _ => {}
        }
    }
    total
}

struct CommissionTotals {
    valor: f64,
    porcentagem: f64,
    imobiliarias: Vec<String>,
}

/// A `comissoes` entry is a commission allocation when its key is a
/// non-empty all-digit string and its value is a mapping; every other
/// key is metadata.
fn is_allocation_key(key: &str, value: &Value) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) && value.is_object()
}

fn aggregate_commissions(comissoes: Option<&Value>) -> CommissionTotals {
    let mut totals = CommissionTotals {
        valor: 0.0,
        porcentagem: 0.0,
        imobiliarias: Vec::new(),
    };

    let Some(Value::Object(entries)) = comissoes else {
        return totals;
    };

    for (key, alloc) in entries {
        if !is_allocation_key(key, alloc) {
            continue;
        }

        totals.valor += decimal_or_zero(alloc.get("comissao_valor"));
        totals.porcentagem += decimal_or_zero(alloc.get("comissao_porcentagem"));

        if let Some(nome) = alloc.get("comissao_quem").and_then(Value::as_str) {
            if !nome.is_empty() && !totals.imobiliarias.iter().any(|n| n == nome) {
                totals.imobiliarias.push(nome.to_string());
            }
        }
    }

    totals
}

/// Loose scalar access: strings pass through, numbers are rendered to
/// their string form, everything else is absent.
fn field_str(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decimal parse where missing or non-numeric is null.
fn parse_decimal(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Decimal parse where anything unparseable counts as zero.
fn decimal_or_zero(value: Option<&Value>) -> f64 {
    parse_decimal(value).unwrap_or(0.0)
}

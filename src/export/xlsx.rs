use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::report::models::{ReservationRow, COLUMNS};

const SHEET_NAME: &str = "Reservas";

/// Serialize the normalized table into an in-memory XLSX buffer: a
/// single "Reservas" sheet, the header row, then one data row per
/// reservation in input order. Absent fields stay blank; aggregated
/// commission totals and the down-payment amount are number cells.
pub fn to_spreadsheet(rows: &[ReservationRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *name, &header)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let r = idx as u32 + 1;
        write_opt(sheet, r, 0, &row.unidade)?;
        write_opt(sheet, r, 1, &row.empreendimento)?;
        write_opt(sheet, r, 2, &row.cliente)?;
        write_opt(sheet, r, 3, &row.data_contrato)?;
        write_opt(sheet, r, 4, &row.valor_contrato)?;
        sheet.write(r, 5, row.comissao)?;
        sheet.write(r, 6, row.porcentagem)?;
        write_opt(sheet, r, 7, &row.imobiliaria)?;
        write_opt(sheet, r, 8, &row.data_pag_sinal)?;
        sheet.write(r, 9, row.forma_pagamento.as_str())?;
        write_opt(sheet, r, 10, &row.valor_tabela)?;
        if let Some(valor) = row.valor_sinal {
            sheet.write(r, 11, valor)?;
        }
    }

    workbook
        .save_to_buffer()
        .context("failed to serialize workbook")
}

fn write_opt(sheet: &mut Worksheet, row: u32, col: u16, value: &Option<String>) -> Result<()> {
    if let Some(v) = value {
        sheet.write(row, col, v.as_str())?;
    }
    Ok(())
}

/// Default output filename for one report run.
pub fn report_filename(project_id: u32, month: u32, year: i32) -> String {
    format!("reservas_{}_{:02}_{}.xlsx", project_id, month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(unidade: &str) -> ReservationRow {
        ReservationRow {
            unidade: Some(unidade.to_string()),
            empreendimento: Some("CARBON".to_string()),
            cliente: Some("Maria Souza".to_string()),
            data_contrato: Some("05/01/2025".to_string()),
            valor_contrato: Some("350000.00".to_string()),
            comissao: 150.0,
            porcentagem: 3.0,
            imobiliaria: Some("Agência A".to_string()),
            data_pag_sinal: Some("10/01/2025".to_string()),
            forma_pagamento: "11 parcelas".to_string(),
            valor_tabela: Some("360000.00".to_string()),
            valor_sinal: Some(1500.50),
        }
    }

    #[test]
    fn produces_a_valid_xlsx_container() {
        let rows = vec![sample_row("T1-101"), sample_row("T1-102")];
        let bytes = to_spreadsheet(&rows).unwrap();

        // XLSX files are ZIP containers
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn empty_table_still_carries_the_header() {
        let bytes = to_spreadsheet(&[]).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn rows_with_absent_fields_export_cleanly() {
        let row = ReservationRow {
            unidade: None,
            empreendimento: None,
            cliente: None,
            data_contrato: None,
            valor_contrato: None,
            comissao: 0.0,
            porcentagem: 0.0,
            imobiliaria: None,
            data_pag_sinal: None,
            forma_pagamento: "-1 parcelas".to_string(),
            valor_tabela: None,
            valor_sinal: None,
        };

        assert!(to_spreadsheet(&[row]).is_ok());
    }

    #[test]
    fn filename_pattern() {
        assert_eq!(report_filename(26, 3, 2025), "reservas_26_03_2025.xlsx");
        assert_eq!(report_filename(8, 12, 2024), "reservas_8_12_2024.xlsx");
    }
}

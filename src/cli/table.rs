use anyhow::{Context, Result};
use serde::Serialize;

use crate::algorithms::Analysis;
use crate::algorithms::header::{parse_header, serialize_header};
use crate::cli::{TableArgs, read_file};
use crate::format::EncodedFile;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub byte: u8,
    pub frequency: u64,
    pub code: String,
    pub bits: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub header: String,
    pub distinct: usize,
    pub total: u64,
    pub code_bits: u64,
    pub max_code_len: usize,
    pub entries: Vec<CodeEntry>,
}

impl TableReport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let entries = analysis
            .frequencies
            .symbols()
            .map(|symbol| {
                let code = analysis.codes.get(symbol.byte);
                CodeEntry {
                    byte: symbol.byte,
                    frequency: symbol.frequency,
                    code: code.to_string(),
                    bits: code.len(),
                }
            })
            .collect();

        Self {
            header: serialize_header(&analysis.frequencies),
            distinct: analysis.frequencies.distinct(),
            total: analysis.frequencies.total(),
            code_bits: analysis.code_bits(),
            max_code_len: analysis.depth,
            entries,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "header: {}\n{} distinct bytes, {} total, {} code bits, longest code {}\n{:>4}  {:<6}  {:>10}  code\n",
            self.header, self.distinct, self.total, self.code_bits, self.max_code_len, "byte", "char", "freq"
        );
        for entry in &self.entries {
            out.push_str(&format!(
                "{:>4}  {:<6}  {:>10}  {}\n",
                entry.byte,
                printable(entry.byte),
                entry.frequency,
                entry.code
            ));
        }
        out
    }
}

fn printable(byte: u8) -> String {
    match byte {
        b' ' => "' '".to_string(),
        0x21..=0x7e => format!("{}", byte as char),
        _ => format!("{}", core::ascii::escape_default(byte)),
    }
}

pub fn table(args: TableArgs) -> Result<()> {
    let data = read_file(&args.input)?;

    let analysis = if args.encoded {
        let file = EncodedFile::parse(&data).with_context(|| format!("failed to read header of {}", args.input.display()))?;
        let frequencies = parse_header(&file.header).with_context(|| format!("failed to read header of {}", args.input.display()))?;
        Analysis::of_frequencies(frequencies)
    } else {
        Analysis::of_bytes(&data)
    };
    let report = TableReport::from_analysis(&analysis);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}

#![allow(dead_code)]

use std::path::Path;

use rust_htslib::bam::header::HeaderRecord;
use rust_htslib::bam::record::{Aux, Cigar, CigarString};
use rust_htslib::bam::{self, Read};

pub struct TestRead {
    pub name: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

pub fn test_read(name: &str, seq: &[u8], qual: &[u8]) -> TestRead {
    TestRead {
        name: name.to_string(),
        seq: seq.to_vec(),
        qual: qual.to_vec(),
    }
}

pub fn write_bam(path: &Path, reads: &[TestRead]) {
    let mut header = bam::Header::new();
    let mut sq = HeaderRecord::new(b"SQ");
    sq.push_tag(b"SN", &"chr1");
    sq.push_tag(b"LN", &100_000);
    header.push_record(&sq);

    let mut writer = bam::Writer::from_path(path, &header, bam::Format::Bam).unwrap();
    for (i, r) in reads.iter().enumerate() {
        let mut record = bam::Record::new();
        let cigar = CigarString(vec![Cigar::Match(r.seq.len() as u32)]);
        record.set(r.name.as_bytes(), Some(&cigar), &r.seq, &r.qual);
        record.set_tid(0);
        record.set_pos(100 + 10 * i as i64);
        record.set_mapq(60);
        record.set_flags(if i % 2 == 0 { 0 } else { 16 });
        record.set_mtid(-1);
        record.set_mpos(-1);
        record.set_insert_size(0);
        record.push_aux(b"RG", Aux::String("grp1")).unwrap();
        writer.write(&record).unwrap();
    }
}

pub fn read_bam(path: &Path) -> Vec<bam::Record> {
    let mut reader = bam::Reader::from_path(path).unwrap();
    reader.records().map(|r| r.unwrap()).collect()
}

pub fn scenario_reads() -> Vec<TestRead> {
    vec![
        test_read("readA", b"AC", &[10, 20]),
        test_read("readB", b"G", &[5]),
        test_read("readA", b"TTA", &[30, 30, 30]),
    ]
}


//! Integration tests for codec sniffing, transparent decoding and record-type detection
//!
//! Every test builds its own input in a temporary directory, compressing it with flate2 or
//! bzip2 where needed, and then goes through the public API only.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::TempDir;

use seqgate_io::{
    Capabilities, CodecKind, InputError, InputHandle, RecordTypeKind, detect, detect_with,
};

const FASTA_BODY: &[u8] = b">seq1\nACGTACGTACGT\n>seq2\nTTGGCCAA\n>seq3\nNNNNAAAA\n";
const FASTQ_BODY: &[u8] = b"@read1\nACGT\n+\nIIII\n@read2\nGGCC\n+\nJJJJ\n";

#[fixture]
fn workdir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn gzipped(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).expect("Failed to compress");
    encoder.finish().expect("Failed to finish gzip stream")
}

fn bzipped(data: &[u8]) -> Vec<u8> {
    let mut encoder = BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(data).expect("Failed to compress");
    encoder.finish().expect("Failed to finish bzip2 stream")
}

fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).expect("Failed to create file");
    file.write_all(contents).expect("Failed to write");
    path
}

/// Deterministic bytes that deflate cannot shrink much.
fn noise(len: usize) -> Vec<u8> {
    let mut state: u64 = 0x9e3779b97f4a7c15;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

fn read_all(handle: &mut InputHandle) -> Result<Vec<u8>, InputError> {
    let mut decoded = Vec::new();
    let mut buffer = [0u8; 4096];
    loop {
        let n = handle.read(&mut buffer)?;
        if n == 0 {
            return Ok(decoded);
        }
        decoded.extend_from_slice(&buffer[..n]);
    }
}

#[rstest]
#[case("plain.fa", FASTA_BODY.to_vec(), CodecKind::Plain, RecordTypeKind::Fasta)]
#[case("plain.fq", FASTQ_BODY.to_vec(), CodecKind::Plain, RecordTypeKind::Fastq)]
#[case("reads.fa.gz", gzipped(FASTA_BODY), CodecKind::Gzip, RecordTypeKind::Fasta)]
#[case("reads.fq.gz", gzipped(FASTQ_BODY), CodecKind::Gzip, RecordTypeKind::Fastq)]
#[case("reads.fa.bz2", bzipped(FASTA_BODY), CodecKind::Bzip2, RecordTypeKind::Fasta)]
#[case("reads.fq.bz2", bzipped(FASTQ_BODY), CodecKind::Bzip2, RecordTypeKind::Fastq)]
fn test_detect_codec_and_record_type(
    workdir: TempDir,
    #[case] name: &str,
    #[case] contents: Vec<u8>,
    #[case] codec: CodecKind,
    #[case] record_type: RecordTypeKind,
) {
    let path = write_file(workdir.path(), name, &contents);
    let detected = detect(&path).unwrap();

    assert_eq!(detected.codec, codec);
    assert_eq!(detected.record_type, record_type);
}

#[rstest]
fn test_detection_ignores_file_extension(workdir: TempDir) {
    // a gzip file named like a plain FASTA file is still gzip
    let path = write_file(workdir.path(), "misleading.fa", &gzipped(FASTA_BODY));
    assert_eq!(detect(&path).unwrap().codec, CodecKind::Gzip);
}

#[rstest]
#[case(CodecKind::Plain)]
#[case(CodecKind::Gzip)]
#[case(CodecKind::Bzip2)]
fn test_decoded_stream_matches_input(workdir: TempDir, #[case] codec: CodecKind) {
    let body = FASTA_BODY.repeat(500);
    let contents = match codec {
        CodecKind::Plain => body.clone(),
        CodecKind::Gzip => gzipped(&body),
        CodecKind::Bzip2 => bzipped(&body),
    };
    let path = write_file(workdir.path(), "roundtrip", &contents);

    let mut handle = InputHandle::open(&path).unwrap();
    assert_eq!(handle.codec(), codec);

    let decoded = read_all(&mut handle).unwrap();
    handle.close();

    assert_eq!(decoded, body);
}

#[rstest]
fn test_bzip2_magic_bytes_are_not_lost(workdir: TempDir) {
    // the decoder sees the stream from offset zero, so the first decoded byte is the marker
    let path = write_file(workdir.path(), "reads.bz2", &bzipped(b">x\nA\n"));
    let mut handle = InputHandle::open(&path).unwrap();

    let mut decoded = Vec::new();
    handle.read_to_end(&mut decoded).unwrap();

    assert_eq!(decoded, b">x\nA\n");
}

#[rstest]
fn test_multi_member_gzip(workdir: TempDir) {
    let mut contents = gzipped(b">seq1\nACGT\n");
    contents.extend(gzipped(b">seq2\nTTAA\n"));
    let path = write_file(workdir.path(), "members.fa.gz", &contents);

    let mut handle = InputHandle::open(&path).unwrap();
    let decoded = read_all(&mut handle).unwrap();

    assert_eq!(decoded, b">seq1\nACGT\n>seq2\nTTAA\n");
}

#[rstest]
fn test_multi_stream_bzip2(workdir: TempDir) {
    // concatenated streams, as written by pbzip2 or `cat a.bz2 b.bz2`
    let mut contents = bzipped(b">a\nA\n");
    contents.extend(bzipped(b">b\nC\n"));
    let path = write_file(workdir.path(), "streams.fa.bz2", &contents);

    let mut handle = InputHandle::open(&path).unwrap();
    assert_eq!(handle.codec(), CodecKind::Bzip2);

    let decoded = read_all(&mut handle).unwrap();
    assert_eq!(decoded, b">a\nA\n>b\nC\n");
}

#[rstest]
fn test_gzip_scenario_seq1(workdir: TempDir) {
    let path = write_file(workdir.path(), "scenario.gz", &gzipped(b">seq1\nACGT\n"));
    let mut handle = InputHandle::open(&path).unwrap();

    assert_eq!(handle.codec(), CodecKind::Gzip);
    assert_eq!(
        RecordTypeKind::classify(&mut handle).unwrap(),
        RecordTypeKind::Fasta
    );
}

#[rstest]
fn test_zero_byte_file_is_truncated(workdir: TempDir) {
    let path = write_file(workdir.path(), "empty.fa", b"");
    let err = detect(&path).unwrap_err();

    assert!(matches!(err, InputError::TruncatedInput { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[rstest]
fn test_compressed_empty_body_is_truncated(workdir: TempDir) {
    let path = write_file(workdir.path(), "empty.fa.gz", &gzipped(b""));
    let err = detect(&path).unwrap_err();

    assert!(matches!(err, InputError::TruncatedInput { .. }));
}

#[rstest]
#[case(b"X marks the spot\n".to_vec())]
#[case(gzipped(b"ACGT\n"))]
#[case(bzipped(b"# comment\n"))]
fn test_unrecognized_record_type(workdir: TempDir, #[case] contents: Vec<u8>) {
    let path = write_file(workdir.path(), "unknown", &contents);
    let err = detect(&path).unwrap_err();

    assert!(matches!(err, InputError::UnrecognizedRecordType { .. }));
}

#[rstest]
fn test_missing_file_is_unreadable(workdir: TempDir) {
    let path = workdir.path().join("missing.fa");
    let err = detect(&path).unwrap_err();

    assert!(matches!(err, InputError::UnreadableFile { .. }));
    assert!(err.to_string().contains("missing.fa"));
}

#[rstest]
#[case(CodecKind::Gzip)]
#[case(CodecKind::Bzip2)]
fn test_unsupported_codec_is_distinct(workdir: TempDir, #[case] codec: CodecKind) {
    let contents = match codec {
        CodecKind::Gzip => gzipped(FASTA_BODY),
        _ => bzipped(FASTA_BODY),
    };
    let path = write_file(workdir.path(), "compressed", &contents);
    let capabilities = Capabilities::compiled().without(codec);

    let err = detect_with(&path, &capabilities).unwrap_err();
    match err {
        InputError::UnsupportedCodec { codec: found, .. } => assert_eq!(found, codec),
        other => panic!("expected UnsupportedCodec, got {:?}", other),
    }
}

#[rstest]
fn test_plain_only_capabilities_still_read_plain(workdir: TempDir) {
    let path = write_file(workdir.path(), "plain.fq", FASTQ_BODY);
    let detected = detect_with(&path, &Capabilities::plain_only()).unwrap();

    assert_eq!(detected.record_type, RecordTypeKind::Fastq);
}

#[rstest]
#[case(vec![0x1f, 0x8b, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff])]
#[case(b"BZ-this is not a bzip2 stream".to_vec())]
fn test_corrupt_header_is_codec_init_error(workdir: TempDir, #[case] contents: Vec<u8>) {
    let path = write_file(workdir.path(), "corrupt", &contents);
    let err = InputHandle::open(&path).unwrap_err();

    assert!(matches!(err, InputError::CodecInit { .. }), "got {:?}", err);
}

#[rstest]
fn test_truncated_gzip_body_is_decode_error(workdir: TempDir) {
    let compressed = gzipped(&noise(256 * 1024));
    let path = write_file(
        workdir.path(),
        "truncated.gz",
        &compressed[..compressed.len() / 2],
    );

    let mut handle = InputHandle::open(&path).unwrap();
    let err = read_all(&mut handle).unwrap_err();

    assert!(matches!(
        err,
        InputError::Decode {
            codec: CodecKind::Gzip,
            ..
        }
    ));
}

#[rstest]
fn test_truncated_bzip2_body_is_decode_error(workdir: TempDir) {
    // several 900k blocks, cut inside a later one
    let compressed = bzipped(&noise(3 * 1024 * 1024));
    let path = write_file(
        workdir.path(),
        "truncated.bz2",
        &compressed[..compressed.len() * 2 / 3],
    );

    let mut handle = InputHandle::open(&path).unwrap();
    let err = read_all(&mut handle).unwrap_err();

    assert!(matches!(
        err,
        InputError::Decode {
            codec: CodecKind::Bzip2,
            ..
        }
    ));
}

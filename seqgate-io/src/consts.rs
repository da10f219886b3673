/// Leading bytes of a gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Leading bytes of a bzip2 stream ("BZ").
pub const BZIP2_MAGIC: [u8; 2] = [b'B', b'Z'];

/// Number of leading bytes inspected to classify a codec.
pub const MAGIC_LEN: usize = 2;

/// First byte of every FASTA record.
pub const FASTA_MARKER: u8 = b'>';

/// First byte of every FASTQ record.
pub const FASTQ_MARKER: u8 = b'@';

//! CSV text handling: delimiter detection, tokenizing, and file reading.

mod delimiter;
mod reader;
mod tokenizer;

pub use delimiter::{CANDIDATE_DELIMITERS, delimiter_name, detect_delimiter, first_line};
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_csv_file, read_csv_file_with_limit,
};
pub use tokenizer::tokenize;

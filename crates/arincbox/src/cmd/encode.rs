use arincbox_frame::encode_word;

use crate::cmd::EncodeArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    for word in args.words {
        print_encoded(word, &encode_word(word), None, format);
    }
    Ok(SUCCESS)
}

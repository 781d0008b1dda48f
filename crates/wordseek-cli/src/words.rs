//! Word list loading.

use std::{fs, path::Path};

use wordseek_core::WordList;

use crate::CliError;

/// Word list used when no `--words` file is given.
pub const BUILTIN_WORDS: &str = "\
OTTER|Playful river swimmer
HERON|Wading bird with a long neck
BADGER|Striped digger of setts
FALCON|Fastest diver in the sky
WALRUS|Tusked giant of the Arctic shore
BEAVER|Builder of dams
LYNX|Wild cat with tufted ears
MOOSE|Largest of the deer
RAVEN|Clever black corvid
SALMON|Swims upstream to spawn
TORTOISE|Slow and steady shell bearer
PUFFIN|Seabird with a colorful beak
";

/// Reads the word list from `path`, or the built-in list when `path` is
/// `None`, keeping at most `count` entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read, holds an invalid word, or no
/// entries remain.
pub fn load_words(path: Option<&Path>, count: usize) -> Result<WordList, CliError> {
    let mut words: WordList = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ReadWords {
                path: path.to_owned(),
                source,
            })?;
            text.parse()?
        }
        None => BUILTIN_WORDS.parse()?,
    };
    if words.len() > count {
        log::debug!("using the first {count} of {} words", words.len());
    }
    words.truncate(count);
    if words.is_empty() {
        return Err(CliError::NoWords);
    }
    Ok(words)
}

//! Command-line option parsing into selection criteria

use std::collections::BTreeSet;
use std::path::PathBuf;

/// What the user asked to run, parsed from the raw argument list.
///
/// Built once per invocation and immutable afterwards. `roots` only ever
/// contains paths that were existing directories at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionCriteria {
    /// Fully-qualified class names given with `-s`
    pub class_names: Vec<String>,
    /// Package names given with `-m`
    pub package_names: Vec<String>,
    /// Class name suffixes given with `-q`
    pub suffixes: Vec<String>,
    /// Package name prefixes given with `-w`
    pub prefixes: Vec<String>,
    /// Classpath root directories (deduplicated)
    pub roots: BTreeSet<PathBuf>,
}

impl SelectionCriteria {
    /// Parse the argument list into selection criteria.
    ///
    /// Flags are order-independent and repeatable; repeated values
    /// accumulate. Any token that is not a recognized flag is treated as a
    /// directory candidate and kept only if it exists as a directory. A flag
    /// appearing as the last token is dropped, not an error.
    ///
    /// Returns `None` when there is nothing to run: an empty argument list,
    /// or no surviving root directories.
    pub fn parse_args<I, S>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        if args.is_empty() {
            return None;
        }

        let mut criteria = SelectionCriteria::default();
        let mut i = 0;
        while i < args.len() {
            let target = match args[i].as_str() {
                "-s" => Some(&mut criteria.class_names),
                "-m" => Some(&mut criteria.package_names),
                "-q" => Some(&mut criteria.suffixes),
                "-w" => Some(&mut criteria.prefixes),
                _ => None,
            };
            match target {
                Some(values) => {
                    i += 1;
                    if i < args.len() {
                        values.push(args[i].clone());
                    }
                }
                None => {
                    let path = PathBuf::from(&args[i]);
                    if path.is_dir() {
                        criteria.roots.insert(path);
                    }
                }
            }
            i += 1;
        }

        if criteria.roots.is_empty() {
            None
        } else {
            Some(criteria)
        }
    }
}

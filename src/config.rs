// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line configuration for a single resize.

use crate::error::{CarveError, Result};
use clap::{value_t, App, Arg, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;

/// What to carve, where to put it, and by how much.
#[derive(Debug, Clone, PartialEq)]
pub struct CarveConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Columns to remove.
    pub reduce_width: u32,
    /// Rows to remove.
    pub reduce_height: u32,
    /// Where to write an energy map of the input, if anywhere.
    pub energy_map: Option<PathBuf>,
    pub verbosity: u64,
}

impl CarveConfig {
    /// The argument parser.  The long options match the old
    /// `-in/-out/-width/-height` invocation.
    pub fn app<'a, 'b>() -> App<'a, 'b> {
        App::new("pngseam")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
            .about("Shrink an image by removing its least interesting seams")
            .arg(
                Arg::with_name("input")
                    .short("i")
                    .long("in")
                    .value_name("FILE")
                    .help("The image to shrink")
                    .takes_value(true)
                    .required(true),
            )
            .arg(
                Arg::with_name("output")
                    .short("o")
                    .long("out")
                    .value_name("FILE")
                    .help("Where to write the shrunken image (always PNG)")
                    .takes_value(true)
                    .required(true),
            )
            .arg(
                Arg::with_name("width")
                    .short("W")
                    .long("width")
                    .value_name("N")
                    .help("Number of columns to remove")
                    .takes_value(true)
                    .default_value("0"),
            )
            .arg(
                Arg::with_name("height")
                    .short("H")
                    .long("height")
                    .value_name("N")
                    .help("Number of rows to remove")
                    .takes_value(true)
                    .default_value("0"),
            )
            .arg(
                Arg::with_name("energy")
                    .short("e")
                    .long("energy")
                    .value_name("FILE")
                    .help("Also write the energy map of the input image as a PNG")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .multiple(true)
                    .help("More logging; repeat for more still"),
            )
    }

    /// Parse a full argument list, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::app()
            .get_matches_from_safe(args)
            .map_err(CarveError::Cli)?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let reduce_width = value_t!(matches, "width", u32).map_err(CarveError::Cli)?;
        let reduce_height = value_t!(matches, "height", u32).map_err(CarveError::Cli)?;
        Ok(CarveConfig {
            // Both are required, so clap has already rejected their absence.
            input: matches.value_of_os("input").map(PathBuf::from).unwrap_or_default(),
            output: matches.value_of_os("output").map(PathBuf::from).unwrap_or_default(),
            reduce_width,
            reduce_height,
            energy_map: matches.value_of_os("energy").map(PathBuf::from),
            verbosity: matches.occurrences_of("verbose"),
        })
    }
}

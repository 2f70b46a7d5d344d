use std::io::Write;

use hotel_booking::rooms::write_catalogue;

use crate::errors::CliError;

pub(crate) fn run(out: &mut impl Write) -> Result<(), CliError> {
    write_catalogue(out)?;

    Ok(())
}

//! # Rental Interface
//!
//! The four-question interview and the printed agreement.
//!
//! The interface is generic over its streams so tests can drive it with
//! in-memory buffers: prompts and the receipt go to `output`, every
//! rejection goes to `error`, and the process-facing wrapper in `main`
//! hands in the real stdio handles.

use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use rentool_core::desk::RentalDesk;
use rentool_core::types::RentalAgreement;
use rentool_core::DATE_FORMAT;

/// Shown when a day count or percentage does not parse as a number.
const INVALID_NUMBER_MESSAGE: &str =
    "The value you have entered is invalid. Please try again with a different value.";

/// Runs one rental interview: four prompts, one desk call, one receipt
/// or one error line.
///
/// Business failures are printed to `error` and the interview ends
/// normally; only genuine stream failures surface as `io::Error`.
pub fn run<R, W, E>(desk: &RentalDesk, input: &mut R, output: &mut W, error: &mut E) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    write!(output, "Enter tool code to search by: ")?;
    output.flush()?;
    let tool_code = read_token(input)?;

    write!(output, "Enter date of rental (mm/dd/yy): ")?;
    output.flush()?;
    let checkout_date = read_token(input)?;

    write!(output, "Enter amount of days customer will be renting for: ")?;
    output.flush()?;
    let rental_days = match read_token(input)?.parse::<i32>() {
        Ok(days) => days,
        Err(_) => {
            writeln!(error, "{INVALID_NUMBER_MESSAGE}")?;
            return Ok(());
        }
    };

    write!(output, "Enter discount percentage [0-100]: ")?;
    output.flush()?;
    let discount_percent = match read_token(input)?.parse::<i32>() {
        Ok(percent) => percent,
        Err(_) => {
            writeln!(error, "{INVALID_NUMBER_MESSAGE}")?;
            return Ok(());
        }
    };

    match desk.checkout(&tool_code, &checkout_date, rental_days, discount_percent) {
        Ok(agreement) => {
            info!(
                tool_code = %agreement.tool_code,
                charge_days = agreement.charge_days,
                "rental agreement produced"
            );
            writeln!(output, "{}", render_receipt(&agreement))?;
        }
        Err(err) => {
            warn!(%err, "rental request rejected");
            writeln!(error, "{err}")?;
        }
    }

    Ok(())
}

/// Reads the next input line as a trimmed token.
fn read_token<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Renders the printed rental agreement.
///
/// Dates use the fixed mm/dd/yy pattern and every amount renders through
/// [`Money`](rentool_core::money::Money)'s `$#,##0.00` display.
pub fn render_receipt(agreement: &RentalAgreement) -> String {
    format!(
        "################################\n\
         ###     Rental Agreement     ###\n\
         ################################\n\
         Tool Code: {}\n\
         Tool Type: {}\n\
         Tool Brand: {}\n\
         Amount of Days for Rental: {}\n\
         Checkout Date: {}\n\
         Due Date: {}\n\
         Daily Rental Charge: {}\n\
         Amount of days charge is applied: {}\n\
         Charge Before Any Discounts: {}\n\
         Discount Percentage: {}%\n\
         Discount Amount: {}\n\
         Final Charge Amount: {}",
        agreement.tool_code,
        agreement.tool_type,
        agreement.tool_brand,
        agreement.rental_days,
        agreement.checkout_date.format(DATE_FORMAT),
        agreement.due_date.format(DATE_FORMAT),
        agreement.daily_charge,
        agreement.charge_days,
        agreement.pre_discount_charge,
        agreement.discount_percent,
        agreement.discount_amount,
        agreement.final_charge,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

//! One-time code entry: a row of single-digit cells

pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpEntry {
    cells: [Option<char>; OTP_LENGTH],
}

impl OtpEntry {
    /// Apply the raw value typed into cell `index`.
    ///
    /// Keeps the last digit typed; anything else empties the cell. Returns the
    /// cell that should take focus next.
    pub fn input(&mut self, index: usize, raw: &str) -> Option<usize> {
        let cell = self.cells.get_mut(index)?;
        *cell = raw.chars().last().filter(char::is_ascii_digit);

        match cell {
            Some(_) if index + 1 < OTP_LENGTH => Some(index + 1),
            _ => None,
        }
    }

    pub fn cell(&self, index: usize) -> String {
        self.cells
            .get(index)
            .copied()
            .flatten()
            .map(String::from)
            .unwrap_or_default()
    }

    /// The full code once every cell holds a digit
    pub fn code(&self) -> Option<String> {
        self.cells.iter().copied().collect::<Option<String>>()
    }

    pub fn clear(&mut self) {
        self.cells = [None; OTP_LENGTH];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_advances_focus() {
        let mut otp = OtpEntry::default();
        assert_eq!(otp.input(0, "4"), Some(1));
        assert_eq!(otp.input(1, "2"), Some(2));
        assert_eq!(otp.cell(0), "4");
        assert_eq!(otp.code(), None);
    }

    #[test]
    fn last_cell_completes_the_code() {
        let mut otp = OtpEntry::default();
        for (i, d) in "90210".chars().enumerate() {
            otp.input(i, &d.to_string());
        }
        assert_eq!(otp.code(), None);
        assert_eq!(otp.input(5, "7"), None);
        assert_eq!(otp.code().as_deref(), Some("902107"));
    }

    #[test]
    fn non_digits_clear_the_cell() {
        let mut otp = OtpEntry::default();
        otp.input(2, "5");
        assert_eq!(otp.input(2, "x"), None);
        assert_eq!(otp.cell(2), "");

        // overtyping keeps the newest digit
        otp.input(3, "18");
        assert_eq!(otp.cell(3), "8");
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut otp = OtpEntry::default();
        assert_eq!(otp.input(OTP_LENGTH, "1"), None);
        assert_eq!(otp.cell(OTP_LENGTH), "");

        otp.input(0, "1");
        otp.clear();
        assert_eq!(otp, OtpEntry::default());
    }
}

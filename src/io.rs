use std::io::BufRead;

/// Read in next line and split on whitespace after trimming
pub fn get_next_line<'a, R: BufRead>(
    rdr: &mut R,
    buf: &'a mut String,
) -> anyhow::Result<Option<Vec<&'a str>>> {
    buf.clear();
    if rdr.read_line(buf)? == 0 {
        Ok(None)
    } else {
        Ok(Some(buf.split_whitespace().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_on_any_whitespace() {
        let mut rdr = Cursor::new("chr1\t100 5.0\nchr1  101\t\t6\n");
        let mut buf = String::new();
        let fields = get_next_line(&mut rdr, &mut buf).unwrap().unwrap();
        assert_eq!(fields, vec!["chr1", "100", "5.0"]);
        let fields = get_next_line(&mut rdr, &mut buf).unwrap().unwrap();
        assert_eq!(fields, vec!["chr1", "101", "6"]);
        assert!(get_next_line(&mut rdr, &mut buf).unwrap().is_none());
    }

    #[test]
    fn blank_line_gives_no_fields() {
        let mut rdr = Cursor::new("   \nchr1 1 2\n");
        let mut buf = String::new();
        let fields = get_next_line(&mut rdr, &mut buf).unwrap().unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn last_line_without_newline() {
        let mut rdr = Cursor::new("chr1 1 2");
        let mut buf = String::new();
        let fields = get_next_line(&mut rdr, &mut buf).unwrap().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(get_next_line(&mut rdr, &mut buf).unwrap().is_none());
    }
}

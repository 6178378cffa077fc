mod parse_good;

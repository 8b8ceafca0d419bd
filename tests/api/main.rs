mod cors;
mod test_email;

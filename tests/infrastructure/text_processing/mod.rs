mod pdf_extraction_test;

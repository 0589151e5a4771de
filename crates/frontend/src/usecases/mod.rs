pub mod u501_tender_check;

mod mock_dns_query;

pub use answers::{
    a_answer, aaaa_answer, cname_answer, mx_answer, ptr_answer, spf_answer, txt_answer,
    txt_bytes_answer,
};
pub use mock_dns_query::{MockDnsQuery, MOCK_NAME_SERVER};

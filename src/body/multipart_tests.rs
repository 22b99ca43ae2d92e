//! Tests for `MultipartFormDataBody`.

use super::{EncodableBody, MultipartFile, MultipartFormDataBody};
use crate::transport::HttpRequest;

fn blank_request() -> HttpRequest {
    HttpRequest::post(url::Url::parse("https://example.com/upload").unwrap())
}

fn boundary_of(request: &HttpRequest) -> String {
    let content_type = request
        .headers
        .get(http::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    content_type
        .strip_prefix("multipart/form-data; boundary=")
        .unwrap()
        .to_string()
}

mod to_bytes {
    use super::*;

    #[test]
    fn emits_fields_then_files_in_exact_wire_format() {
        let body = MultipartFormDataBody::new()
            .with_param("title", "Report")
            .with_file(
                "attachment",
                MultipartFile::new(b"PDF".to_vec(), "application/pdf", "report.pdf"),
            );

        let bytes = body.to_bytes("XYZ");

        let expected = "--XYZ\r\n\
             Content-Disposition: form-data; name=\"title\"\r\n\r\n\
             Report\r\n\
             --XYZ\r\n\
             Content-Disposition: form-data; name=\"attachment\"; filename=\"report.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             PDF\r\n\
             --XYZ--\r\n";
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn orders_fields_by_key_regardless_of_insertion_order() {
        let body = MultipartFormDataBody::new()
            .with_param("b", "2")
            .with_param("a", "1");

        let text = String::from_utf8(body.to_bytes("B")).unwrap();

        let a = text.find("name=\"a\"").unwrap();
        let b = text.find("name=\"b\"").unwrap();
        assert!(a < b);
    }

    #[test]
    fn orders_files_by_key() {
        let body = MultipartFormDataBody::new()
            .with_file("zeta", MultipartFile::new(b"z".to_vec(), "text/plain", "z.txt"))
            .with_file("alpha", MultipartFile::new(b"a".to_vec(), "text/plain", "a.txt"));

        let text = String::from_utf8(body.to_bytes("B")).unwrap();

        assert!(text.find("a.txt").unwrap() < text.find("z.txt").unwrap());
    }

    #[test]
    fn keeps_binary_file_bytes_intact() {
        let payload = vec![0x00, 0xFF, 0x0D, 0x0A, 0x7F];
        let body = MultipartFormDataBody::new()
            .with_file("blob", MultipartFile::new(payload.clone(), "application/octet-stream", "b.bin"));

        let bytes = body.to_bytes("B");

        assert!(bytes.windows(payload.len()).any(|w| w == payload.as_slice()));
    }

    #[test]
    fn empty_body_is_only_the_closing_boundary() {
        let bytes = MultipartFormDataBody::new().to_bytes("B");

        assert_eq!(bytes, b"--B--\r\n".to_vec());
    }
}

mod encode {
    use super::*;

    #[test]
    fn sets_content_type_with_boundary_used_in_body() {
        let body = MultipartFormDataBody::new().with_param("a", "1");
        let mut request = blank_request();

        body.encode(&mut request).unwrap();

        let boundary = boundary_of(&request);
        assert_eq!(request.body, Some(body.to_bytes(&boundary)));
    }

    #[test]
    fn generates_fresh_boundary_per_call() {
        let body = MultipartFormDataBody::new().with_param("a", "1");
        let mut first = blank_request();
        let mut second = blank_request();

        body.encode(&mut first).unwrap();
        body.encode(&mut second).unwrap();

        assert_ne!(boundary_of(&first), boundary_of(&second));
    }
}

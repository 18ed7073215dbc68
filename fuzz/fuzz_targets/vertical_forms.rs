#![no_main]
use libfuzzer_sys::fuzz_target;

use belle_core::VerticalForms;

fuzz_target!(|data: &[u8]| {
    // Limit input size to prevent timeouts
    let data = if data.len() > 10000 { &data[..10000] } else { data };
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(forms) = VerticalForms::parse(text) {
        // Every parsed entry is a member, and entries never exceed data lines
        assert!(forms.len() <= text.lines().count());
        for ch in forms.iter() {
            assert!(forms.contains(ch));
        }

        // Re-serializing and parsing again yields the same set
        let rendered: String = forms.iter().map(|c| format!("U+{:04X}\n", c as u32)).collect();
        let reparsed = VerticalForms::parse(&rendered).expect("serialized set parses");
        assert_eq!(reparsed.len(), forms.len());
    }
});

/// Parsed `#[column(...)]` attribute.
#[derive(Debug)]
pub(crate) struct Column {
    /// Tag string: a column name, optionally followed by `,`-separated
    /// qualifiers, or `"-"`.
    pub(crate) tag: Option<syn::LitStr>,

    /// `skip` keyword; same as a `"-"` tag
    pub(crate) skip: bool,
}

mod kw {
    syn::custom_keyword!(skip);
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }

    /// The tag string recorded in the field descriptor.
    pub(crate) fn tag(&self) -> Option<String> {
        if self.skip {
            Some("-".to_string())
        } else {
            self.tag.as_ref().map(syn::LitStr::value)
        }
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            tag: None,
            skip: false,
        };

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column("name,omitempty")]
        // #[column("-")]
        // #[column(skip)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.tag.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                let tag: syn::LitStr = input.parse()?;
                if tag.value().is_empty() {
                    return Err(syn::Error::new(tag.span(), "column name cannot be empty"));
                }
                result.tag = Some(tag);
            } else if lookahead.peek(kw::skip) {
                let skip: kw::skip = input.parse()?;
                if result.skip {
                    return Err(syn::Error::new(skip.span, "duplicate `skip`"));
                }
                result.skip = true;
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        if result.skip && result.tag.is_some() {
            return Err(syn::Error::new(
                input.span(),
                "`skip` cannot be combined with a column name",
            ));
        }

        Ok(result)
    }
}

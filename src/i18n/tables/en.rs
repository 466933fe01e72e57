// SPDX-License-Identifier: PMPL-1.0-or-later

//! English strings. This is the root `XSLTErrorResources` bundle and the
//! reference key set every other table is audited against.

use super::TableHeaders;

pub(crate) const HEADERS: TableHeaders = TableHeaders {
    error: "Error: ",
    warning: "Warning: ",
    xsl: "XSLT ",
    xml: "XML ",
    query: "PATTERN ",
    error_string: "#error",
};

pub(crate) const MESSAGES: &[(&str, &str)] = &[
    // Errors
    ("ER0000", "{0}"),
    ("ER_NO_CURLYBRACE", "Error: Can not have '{' within expression"),
    ("ER_ILLEGAL_ATTRIBUTE", "{0} has an illegal attribute: {1}"),
    ("ER_NULL_SOURCENODE_APPLYIMPORTS", "sourceNode is null in xsl:apply-imports!"),
    ("ER_CANNOT_ADD", "Can not add {0} to {1}"),
    ("ER_NULL_SOURCENODE_HANDLEAPPLYTEMPLATES", "sourceNode is null in handleApplyTemplatesInstruction!"),
    ("ER_NO_NAME_ATTRIB", "{0} must have a name attribute."),
    ("ER_TEMPLATE_NOT_FOUND", "Could not find template named: {0}"),
    ("ER_CANT_RESOLVE_NAME_AVT", "Could not resolve name AVT in xsl:call-template."),
    ("ER_REQUIRES_ATTRIB", "{0} requires attribute: {1}"),
    ("ER_MUST_HAVE_TEST_ATTRIB", "{0} must have a ''test'' attribute."),
    ("ER_BAD_VAL_ON_LEVEL_ATTRIB", "Bad value on level attribute: {0}"),
    ("ER_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML", "processing-instruction name can not be 'xml'"),
    ("ER_PROCESSINGINSTRUCTION_NOTVALID_NCNAME", "processing-instruction name must be a valid NCName: {0}"),
    ("ER_NEED_MATCH_ATTRIB", "{0} must have a match attribute if it has a mode."),
    ("ER_NEED_NAME_OR_MATCH_ATTRIB", "{0} requires either a name or a match attribute."),
    ("ER_CANT_RESOLVE_NSPREFIX", "Can not resolve namespace prefix: {0}"),
    ("ER_ILLEGAL_VALUE", "xml:space has an illegal value: {0}"),
    ("ER_NO_OWNERDOC", "Child node does not have an owner document!"),
    ("ER_ELEMTEMPLATEELEM_ERR", "ElemTemplateElement error: {0}"),
    ("ER_NULL_CHILD", "Trying to add a null child!"),
    ("ER_NEED_SELECT_ATTRIB", "{0} requires a select attribute."),
    ("ER_NEED_TEST_ATTRIB", "xsl:when must have a 'test' attribute."),
    ("ER_NEED_NAME_ATTRIB", "xsl:with-param must have a 'name' attribute."),
    ("ER_NO_CONTEXT_OWNERDOC", "context does not have an owner document!"),
    ("ER_COULD_NOT_CREATE_XML_PROC_LIAISON", "Could not create XML TransformerFactory Liaison: {0}"),
    ("ER_PROCESS_NOT_SUCCESSFUL", "Xalan: Process was not successful."),
    ("ER_NOT_SUCCESSFUL", "Xalan: was not successful."),
    ("ER_ENCODING_NOT_SUPPORTED", "Encoding not supported: {0}"),
    ("ER_COULD_NOT_CREATE_TRACELISTENER", "Could not create TraceListener: {0}"),
    ("ER_KEY_REQUIRES_NAME_ATTRIB", "xsl:key requires a 'name' attribute!"),
    ("ER_KEY_REQUIRES_MATCH_ATTRIB", "xsl:key requires a 'match' attribute!"),
    ("ER_KEY_REQUIRES_USE_ATTRIB", "xsl:key requires a 'use' attribute!"),
    ("ER_REQUIRES_ELEMENTS_ATTRIB", "(StylesheetHandler) {0} requires an ''elements'' attribute!"),
    ("ER_MISSING_PREFIX_ATTRIB", "(StylesheetHandler) {0} attribute ''prefix'' is missing"),
    ("ER_BAD_STYLESHEET_URL", "Stylesheet URL is bad: {0}"),
    ("ER_FILE_NOT_FOUND", "Stylesheet file was not found: {0}"),
    ("ER_IOEXCEPTION", "Had IO Exception with stylesheet file: {0}"),
    ("ER_NO_HREF_ATTRIB", "(StylesheetHandler) Could not find href attribute for {0}"),
    ("ER_STYLESHEET_INCLUDES_ITSELF", "(StylesheetHandler) {0} is directly or indirectly including itself!"),
    ("ER_PROCESSINCLUDE_ERROR", "StylesheetHandler.processInclude error, {0}"),
    ("ER_MISSING_LANG_ATTRIB", "(StylesheetHandler) {0} attribute ''lang'' is missing"),
    ("ER_MISSING_CONTAINER_ELEMENT_COMPONENT", "(StylesheetHandler) misplaced {0} element?? Missing container element ''component''"),
    ("ER_CAN_ONLY_OUTPUT_TO_ELEMENT", "Can only output to an Element, DocumentFragment, Document, or PrintWriter."),
    ("ER_PROCESS_ERROR", "StylesheetRoot.process error"),
    ("ER_UNIMPLNODE_ERROR", "UnImplNode error: {0}"),
    ("ER_NO_SELECT_EXPRESSION", "Error! Did not find xpath select expression (-select)."),
    ("ER_CANNOT_SERIALIZE_XSLPROCESSOR", "Can not serialize an XSLProcessor!"),
    ("ER_NO_INPUT_STYLESHEET", "Stylesheet input was not specified!"),
    ("ER_FAILED_PROCESS_STYLESHEET", "Failed to process stylesheet!"),
    ("ER_COULDNT_PARSE_DOC", "Could not parse {0} document!"),
    ("ER_COULDNT_FIND_FRAGMENT", "Could not find fragment: {0}"),
    ("ER_NODE_NOT_ELEMENT", "Node pointed to by fragment identifier was not an element: {0}"),
    ("ER_FOREACH_NEED_MATCH_OR_NAME_ATTRIB", "for-each must have either a match or name attribute"),
    ("ER_TEMPLATES_NEED_MATCH_OR_NAME_ATTRIB", "templates must have either a match or name attribute"),
    ("ER_NO_CLONE_OF_DOCUMENT_FRAG", "No clone of a document fragment!"),
    ("ER_CANT_CREATE_ITEM", "Can not create item in result tree: {0}"),
    ("ER_XMLSPACE_ILLEGAL_VALUE", "xml:space in the source XML has an illegal value: {0}"),
    ("ER_NO_XSLKEY_DECLARATION", "There is no xsl:key declaration for {0}!"),
    ("ER_CANT_CREATE_URL", "Error! Cannot create url for: {0}"),
    ("ER_XSLFUNCTIONS_UNSUPPORTED", "xsl:functions is unsupported"),
    ("ER_PROCESSOR_ERROR", "XSLT TransformerFactory Error"),
    ("ER_NOT_ALLOWED_INSIDE_STYLESHEET", "(StylesheetHandler) {0} not allowed inside a stylesheet!"),
    ("ER_RESULTNS_NOT_SUPPORTED", "result-ns no longer supported!  Use xsl:output instead."),
    ("ER_DEFAULTSPACE_NOT_SUPPORTED", "default-space no longer supported!  Use xsl:strip-space or xsl:preserve-space instead."),
    ("ER_INDENTRESULT_NOT_SUPPORTED", "indent-result no longer supported!  Use xsl:output instead."),
    ("ER_ILLEGAL_ATTRIB", "(StylesheetHandler) {0} has an illegal attribute: {1}"),
    ("ER_UNKNOWN_XSL_ELEM", "Unknown XSL element: {0}"),
    ("ER_BAD_XSLSORT_USE", "(StylesheetHandler) xsl:sort can only be used with xsl:apply-templates or xsl:for-each."),
    ("ER_MISPLACED_XSLWHEN", "(StylesheetHandler) misplaced xsl:when!"),
    ("ER_XSLWHEN_NOT_PARENTED_BY_XSLCHOOSE", "(StylesheetHandler) xsl:when not parented by xsl:choose!"),
    ("ER_MISPLACED_XSLOTHERWISE", "(StylesheetHandler) misplaced xsl:otherwise!"),
    ("ER_XSLOTHERWISE_NOT_PARENTED_BY_XSLCHOOSE", "(StylesheetHandler) xsl:otherwise not parented by xsl:choose!"),
    ("ER_NOT_ALLOWED_INSIDE_TEMPLATE", "(StylesheetHandler) {0} is not allowed inside a template!"),
    ("ER_UNKNOWN_EXT_NS_PREFIX", "(StylesheetHandler) {0} extension namespace prefix {1} unknown"),
    ("ER_IMPORTS_AS_FIRST_ELEM", "(StylesheetHandler) Imports can only occur as the first elements in the stylesheet!"),
    ("ER_IMPORTING_ITSELF", "(StylesheetHandler) {0} is directly or indirectly importing itself!"),
    ("ER_XMLSPACE_ILLEGAL_VAL", "(StylesheetHandler) xml:space has an illegal value: {0}"),
    ("ER_PROCESSSTYLESHEET_NOT_SUCCESSFUL", "processStylesheet not succesfull!"),
    ("ER_SAX_EXCEPTION", "SAX Exception"),
    ("ER_XSLT_ERROR", "XSLT Error"),
    ("ER_CURRENCY_SIGN_ILLEGAL", "currency sign is not allowed in format pattern string"),
    ("ER_DOCUMENT_FUNCTION_INVALID_IN_STYLESHEET_DOM", "Document function not supported in Stylesheet DOM!"),
    ("ER_CANT_RESOLVE_PREFIX_OF_NON_PREFIX_RESOLVER", "Can't resolve prefix of non-Prefix resolver!"),
    ("ER_REDIRECT_COULDNT_GET_FILENAME", "Redirect extension: Could not get filename - file or select attribute must return vald string."),
    ("ER_CANNOT_BUILD_FORMATTERLISTENER_IN_REDIRECT", "Can not build FormatterListener in Redirect extension!"),
    ("ER_INVALID_PREFIX_IN_EXCLUDERESULTPREFIX", "Prefix in exclude-result-prefixes is not valid: {0}"),
    ("ER_MISSING_NS_URI", "Missing namespace URI for specified prefix"),
    ("ER_MISSING_ARG_FOR_OPTION", "Missing argument for option: {0}"),
    ("ER_INVALID_OPTION", "Invalid option: {0}"),
    ("ER_MALFORMED_FORMAT_STRING", "Malformed format string: {0}"),
    ("ER_STYLESHEET_REQUIRES_VERSION_ATTRIB", "xsl:stylesheet requires a 'version' attribute!"),
    ("ER_ILLEGAL_ATTRIBUTE_VALUE", "Attribute: {0} has an illegal value: {1}"),
    ("ER_CHOOSE_REQUIRES_WHEN", "xsl:choose requires an xsl:when"),
    ("ER_NO_APPLY_IMPORT_IN_FOR_EACH", "xsl:apply-imports not allowed in a xsl:for-each"),
    ("ER_CANT_USE_DTM_FOR_OUTPUT", "Cannot use a DTMLiaison for an output DOM node... pass a com.sun.org.apache.xpath.internal.DOM2Helper instead!"),
    ("ER_CANT_USE_DTM_FOR_INPUT", "Cannot use a DTMLiaison for a input DOM node... pass a com.sun.org.apache.xpath.internal.DOM2Helper instead!"),
    ("ER_CALL_TO_EXT_FAILED", "Call to extension element failed: {0}"),
    ("ER_PREFIX_MUST_RESOLVE", "Prefix must resolve to a namespace: {0}"),
    ("ER_INVALID_UTF16_SURROGATE", "Invalid UTF-16 surrogate detected: {0} ?"),
    ("ER_XSLATTRSET_USED_ITSELF", "xsl:attribute-set {0} used itself, which will cause an infinite loop."),
    ("ER_CANNOT_MIX_XERCESDOM", "Can not mix non Xerces-DOM input with Xerces-DOM output!"),
    ("ER_TOO_MANY_LISTENERS", "addTraceListenersToStylesheet - TooManyListenersException"),
    ("ER_IN_ELEMTEMPLATEELEM_READOBJECT", "In ElemTemplateElement.readObject: {0}"),
    ("ER_DUPLICATE_NAMED_TEMPLATE", "Found more than one template named: {0}"),
    ("ER_INVALID_KEY_CALL", "Invalid function call: recursive key() calls are not allowed"),
    ("ER_REFERENCING_ITSELF", "Variable {0} is directly or indirectly referencing itself!"),
    ("ER_ILLEGAL_DOMSOURCE_INPUT", "The input node can not be null for a DOMSource for newTemplates!"),
    ("ER_CLASS_NOT_FOUND_FOR_OPTION", "Class file not found for option {0}"),
    ("ER_REQUIRED_ELEM_NOT_FOUND", "Required Element not found: {0}"),
    ("ER_INPUT_CANNOT_BE_NULL", "InputStream cannot be null"),
    ("ER_URI_CANNOT_BE_NULL", "URI cannot be null"),
    ("ER_FILE_CANNOT_BE_NULL", "File cannot be null"),
    ("ER_SOURCE_CANNOT_BE_NULL", "InputSource cannot be null"),
    ("ER_CANNOT_INIT_BSFMGR", "Could not initialize BSF Manager"),
    ("ER_CANNOT_CMPL_EXTENSN", "Could not compile extension"),
    ("ER_CANNOT_CREATE_EXTENSN", "Could not create extension: {0} because of: {1}"),
    ("ER_INSTANCE_MTHD_CALL_REQUIRES", "Instance method call to method {0} requires an Object instance as first argument"),
    ("ER_INVALID_ELEMENT_NAME", "Invalid element name specified {0}"),
    ("ER_ELEMENT_NAME_METHOD_STATIC", "Element name method must be static {0}"),
    ("ER_EXTENSION_FUNC_UNKNOWN", "Extension function {0} : {1} is unknown"),
    ("ER_MORE_MATCH_CONSTRUCTOR", "More than one best match for constructor for {0}"),
    ("ER_MORE_MATCH_METHOD", "More than one best match for method {0}"),
    ("ER_MORE_MATCH_ELEMENT", "More than one best match for element method {0}"),
    ("ER_INVALID_CONTEXT_PASSED", "Invalid context passed to evaluate {0}"),
    ("ER_POOL_EXISTS", "Pool already exists"),
    ("ER_NO_DRIVER_NAME", "No driver Name specified"),
    ("ER_NO_URL", "No URL specified"),
    ("ER_POOL_SIZE_LESSTHAN_ONE", "Pool size is less than one!"),
    ("ER_INVALID_DRIVER", "Invalid driver name specified!"),
    ("ER_NO_STYLESHEETROOT", "Did not find the stylesheet root!"),
    ("ER_ILLEGAL_XMLSPACE_VALUE", "Illegal value for xml:space"),
    ("ER_PROCESSFROMNODE_FAILED", "processFromNode failed"),
    ("ER_RESOURCE_COULD_NOT_LOAD", "The resource [ {0} ] could not load: {1} \n {2} \t {3}"),
    ("ER_BUFFER_SIZE_LESSTHAN_ZERO", "Buffer size <=0"),
    ("ER_UNKNOWN_ERROR_CALLING_EXTENSION", "Unknown error when calling extension"),
    ("ER_NO_NAMESPACE_DECL", "Prefix {0} does not have a corresponding namespace declaration"),
    ("ER_ELEM_CONTENT_NOT_ALLOWED", "Element content not allowed for lang=javaclass {0}"),
    ("ER_STYLESHEET_DIRECTED_TERMINATION", "Stylesheet directed termination"),
    ("ER_ONE_OR_TWO", "1 or 2"),
    ("ER_TWO_OR_THREE", "2 or 3"),
    ("ER_COULD_NOT_LOAD_RESOURCE", "Could not load {0} (check CLASSPATH), now using just the defaults"),
    ("ER_CANNOT_INIT_DEFAULT_TEMPLATES", "Cannot initialize default templates"),
    ("ER_RESULT_NULL", "Result should not be null"),
    ("ER_RESULT_COULD_NOT_BE_SET", "Result could not be set"),
    ("ER_NO_OUTPUT_SPECIFIED", "No output specified"),
    ("ER_CANNOT_TRANSFORM_TO_RESULT_TYPE", "Can''t transform to a Result of type {0}"),
    ("ER_CANNOT_TRANSFORM_SOURCE_TYPE", "Can''t transform a Source of type {0}"),
    ("ER_NULL_CONTENT_HANDLER", "Null content handler"),
    ("ER_NULL_ERROR_HANDLER", "Null error handler"),
    ("ER_CANNOT_CALL_PARSE", "parse can not be called if the ContentHandler has not been set"),
    ("ER_NO_PARENT_FOR_FILTER", "No parent for filter"),
    ("ER_NO_STYLESHEET_IN_MEDIA", "No stylesheet found in: {0}, media= {1}"),
    ("ER_NO_STYLESHEET_PI", "No xml-stylesheet PI found in: {0}"),
    ("ER_NOT_SUPPORTED", "Not supported: {0}"),
    ("ER_PROPERTY_VALUE_BOOLEAN", "Value for property {0} should be a Boolean instance"),
    ("ER_COULD_NOT_FIND_EXTERN_SCRIPT", "Could not get to external script at {0}"),
    ("ER_RESOURCE_COULD_NOT_FIND", "The resource [ {0} ] could not be found.\n {1}"),
    ("ER_OUTPUT_PROPERTY_NOT_RECOGNIZED", "Output property not recognized: {0}"),
    ("ER_FAILED_CREATING_ELEMLITRSLT", "Failed creating ElemLiteralResult instance"),
    ("ER_VALUE_SHOULD_BE_NUMBER", "Value for {0} should contain a parsable number"),
    ("ER_VALUE_SHOULD_EQUAL", "Value for {0} should equal yes or no"),
    ("ER_FAILED_CALLING_METHOD", "Failed calling {0} method"),
    ("ER_FAILED_CREATING_ELEMTMPL", "Failed creating ElemTemplateElement instance"),
    ("ER_CHARS_NOT_ALLOWED", "Characters are not allowed at this point in the document"),
    ("ER_ATTR_NOT_ALLOWED", "\"{0}\" attribute is not allowed on the {1} element!"),
    ("ER_BAD_VALUE", "{0} bad value {1}"),
    ("ER_ATTRIB_VALUE_NOT_FOUND", "{0} attribute value not found"),
    ("ER_ATTRIB_VALUE_NOT_RECOGNIZED", "{0} attribute value not recognized"),
    ("ER_NULL_URI_NAMESPACE", "Attempting to generate a namespace prefix with a null URI"),
    ("ER_NUMBER_TOO_BIG", "Attempting to format a number bigger than the largest Long integer"),
    ("ER_CANNOT_FIND_SAX1_DRIVER", "Cannot find SAX1 driver class {0}"),
    ("ER_SAX1_DRIVER_NOT_LOADED", "SAX1 driver class {0} found but cannot be loaded"),
    ("ER_SAX1_DRIVER_NOT_INSTANTIATED", "SAX1 driver class {0} loaded but cannot be instantiated"),
    ("ER_SAX1_DRIVER_NOT_IMPLEMENT_PARSER", "SAX1 driver class {0} does not implement org.xml.sax.Parser"),
    ("ER_PARSER_PROPERTY_NOT_SPECIFIED", "System property org.xml.sax.parser not specified"),
    ("ER_PARSER_ARG_CANNOT_BE_NULL", "Parser argument must not be null"),
    ("ER_FEATURE", "Feature: {0}"),
    ("ER_PROPERTY", "Property: {0}"),
    ("ER_NULL_ENTITY_RESOLVER", "Null entity resolver"),
    ("ER_NULL_DTD_HANDLER", "Null DTD handler"),
    ("ER_NO_DRIVER_NAME_SPECIFIED", "No Driver Name Specified!"),
    ("ER_NO_URL_SPECIFIED", "No URL Specified!"),
    ("ER_POOLSIZE_LESS_THAN_ONE", "Pool size is less then 1!"),
    ("ER_INVALID_DRIVER_NAME", "Invalid Driver Name Specified!"),
    ("ER_ERRORLISTENER", "ErrorListener"),
    ("ER_ASSERT_NO_TEMPLATE_PARENT", "Programmer's error! The expression has no ElemTemplateElement parent!"),
    ("ER_ASSERT_REDUNDENT_EXPR_ELIMINATOR", "Programmer''s assertion in RedundentExprEliminator: {0}"),
    ("ER_NOT_ALLOWED_IN_POSITION", "{0} is not allowed in this position in the stylesheet!"),
    ("ER_NONWHITESPACE_NOT_ALLOWED_IN_POSITION", "Non-whitespace text is not allowed in this position in the stylesheet!"),
    ("INVALID_TCHAR", "Illegal value: {1} used for CHAR attribute: {0}.  An attribute of type CHAR must be only 1 character!"),
    ("INVALID_QNAME", "Illegal value: {1} used for QNAME attribute: {0}"),
    ("INVALID_ENUM", "Illegal value: {1} used for ENUM attribute: {0}.  Valid values are: {2}."),
    ("INVALID_NMTOKEN", "Illegal value: {1} used for NMTOKEN attribute: {0}"),
    ("INVALID_NCNAME", "Illegal value: {1} used for NCNAME attribute: {0}"),
    ("INVALID_BOOLEAN", "Illegal value: {1} used for boolean attribute: {0}"),
    ("INVALID_NUMBER", "Illegal value: {1} used for number attribute: {0}"),
    ("ER_ARG_LITERAL", "Argument to {0} in match pattern must be a literal."),
    ("ER_DUPLICATE_GLOBAL_VAR", "Duplicate global variable declaration."),
    ("ER_DUPLICATE_VAR", "Duplicate variable declaration."),
    ("ER_TEMPLATE_NAME_MATCH", "xsl:template must have a name or match attribute (or both)"),
    ("ER_INVALID_PREFIX", "Prefix in exclude-result-prefixes is not valid: {0}"),
    ("ER_NO_ATTRIB_SET", "attribute-set named {0} does not exist"),
    // Warnings
    ("WG_FOUND_CURLYBRACE", "Found '}' but no attribute template open!"),
    ("WG_COUNT_ATTRIB_MATCHES_NO_ANCESTOR", "Warning: count attribute does not match an ancestor in xsl:number! Target = {0}"),
    ("WG_EXPR_ATTRIB_CHANGED_TO_SELECT", "Old syntax: The name of the 'expr' attribute has been changed to 'select'."),
    ("WG_NO_LOCALE_IN_FORMATNUMBER", "Xalan doesn't yet handle the locale name in the format-number function."),
    ("WG_LOCALE_NOT_FOUND", "Warning: Could not find locale for xml:lang={0}"),
    ("WG_CANNOT_MAKE_URL_FROM", "Can not make URL from: {0}"),
    ("WG_CANNOT_LOAD_REQUESTED_DOC", "Can not load requested doc: {0}"),
    ("WG_CANNOT_FIND_COLLATOR", "Could not find Collator for <sort xml:lang={0}"),
    ("WG_FUNCTIONS_SHOULD_USE_URL", "Old syntax: the functions instruction should use a url of {0}"),
    ("WG_ENCODING_NOT_SUPPORTED_USING_UTF8", "encoding not supported: {0}, using UTF-8"),
    ("WG_ENCODING_NOT_SUPPORTED_USING_JAVA", "encoding not supported: {0}, using Java {1}"),
    ("WG_SPECIFICITY_CONFLICTS", "Specificity conflicts found: {0} Last found in stylesheet will be used."),
    ("WG_PARSING_AND_PREPARING", "========= Parsing and preparing {0} =========="),
    ("WG_ATTR_TEMPLATE", "Attr Template, {0}"),
    ("WG_CONFLICT_BETWEEN_XSLSTRIPSPACE_AND_XSLPRESERVESP", "Match conflict between xsl:strip-space and xsl:preserve-space"),
    ("WG_ATTRIB_NOT_HANDLED", "Xalan does not yet handle the {0} attribute!"),
    ("WG_NO_DECIMALFORMAT_DECLARATION", "No declaration found for decimal format: {0}"),
    ("WG_OLD_XSLT_NS", "Missing or incorrect XSLT Namespace."),
    ("WG_ONE_DEFAULT_XSLDECIMALFORMAT_ALLOWED", "Only one default xsl:decimal-format declaration is allowed."),
    ("WG_XSLDECIMALFORMAT_NAMES_MUST_BE_UNIQUE", "xsl:decimal-format names must be unique. Name \"{0}\" has been duplicated."),
    ("WG_ILLEGAL_ATTRIBUTE", "{0} has an illegal attribute: {1}"),
    ("WG_COULD_NOT_RESOLVE_PREFIX", "Could not resolve namespace prefix: {0}. The node will be ignored."),
    ("WG_STYLESHEET_REQUIRES_VERSION_ATTRIB", "xsl:stylesheet requires a 'version' attribute!"),
    ("WG_ILLEGAL_ATTRIBUTE_NAME", "Illegal attribute name: {0}"),
    ("WG_ILLEGAL_ATTRIBUTE_VALUE", "Illegal value used for attribute {0}: {1}"),
    ("WG_EMPTY_SECOND_ARG", "Resulting nodeset from second argument of document function is empty. Return an empty node-set."),
    ("WG_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML", "The value of the 'name' attribute of xsl:processing-instruction name must not be 'xml'"),
    ("WG_PROCESSINGINSTRUCTION_NOTVALID_NCNAME", "The value of the ''name'' attribute of xsl:processing-instruction must be a valid NCName: {0}"),
    ("WG_ILLEGAL_ATTRIBUTE_POSITION", "Cannot add attribute {0} after child nodes or before an element is produced.  Attribute will be ignored."),
    // Miscellaneous
    ("ui_language", "en"),
    ("help_language", "en"),
    ("language", "en"),
    ("BAD_CODE", "Parameter to createMessage was out of bounds"),
    ("FORMAT_FAILED", "Exception thrown during messageFormat call"),
    ("version", ">>>>>>> Xalan Version "),
    ("version2", "<<<<<<<"),
    ("yes", "yes"),
    ("line", "Line #"),
    ("column", "Column #"),
    ("xsldone", "XSLProcessor: done"),
    // Process usage
    ("xslProc_option", "Xalan-J command line Process class options:"),
    ("xslProc_invalid_xsltc_option", "The option {0} is not supported in XSLTC mode."),
    ("xslProc_invalid_xalan_option", "The option {0} can only be used with -XSLTC."),
    ("xslProc_no_input", "Error: No stylesheet or input xml is specified. Run this command without any option for usage instructions."),
    ("xslProc_common_options", "-Common Options-"),
    ("xslProc_xalan_options", "-Options for Xalan-"),
    ("xslProc_xsltc_options", "-Options for XSLTC-"),
    ("xslProc_return_to_continue", "(press <return> to continue)"),
    ("optionXSLTC", "   [-XSLTC (use XSLTC for transformation)]"),
    ("optionIN", "   [-IN inputXMLURL]"),
    ("optionXSL", "   [-XSL XSLTransformationURL]"),
    ("optionOUT", "   [-OUT outputFileName]"),
    ("optionLXCIN", "   [-LXCIN compiledStylesheetFileNameIn]"),
    ("optionLXCOUT", "   [-LXCOUT compiledStylesheetFileNameOutOut]"),
    ("optionPARSER", "   [-PARSER fully qualified class name of parser liaison]"),
    ("optionE", "   [-E (Do not expand entity refs)]"),
    ("optionV", "   [-E (Do not expand entity refs)]"),
    ("optionQC", "   [-QC (Quiet Pattern Conflicts Warnings)]"),
    ("optionQ", "   [-Q  (Quiet Mode)]"),
    ("optionLF", "   [-LF (Use linefeeds only on output {default is CR/LF})]"),
    ("optionCR", "   [-CR (Use carriage returns only on output {default is CR/LF})]"),
    ("optionESCAPE", "   [-ESCAPE (Which characters to escape {default is <>&\"'\\r\\n}]"),
    ("optionINDENT", "   [-INDENT (Control how many spaces to indent {default is 0})]"),
    ("optionTT", "   [-TT (Trace the templates as they are being called.)]"),
    ("optionTG", "   [-TG (Trace each generation event.)]"),
    ("optionTS", "   [-TS (Trace each selection event.)]"),
    ("optionTTC", "   [-TTC (Trace the template children as they are being processed.)]"),
    ("optionTCLASS", "   [-TCLASS (TraceListener class for trace extensions.)]"),
    ("optionVALIDATE", "   [-VALIDATE (Set whether validation occurs.  Validation is off by default.)]"),
    ("optionEDUMP", "   [-EDUMP {optional filename} (Do stackdump on error.)]"),
    ("optionXML", "   [-XML (Use XML formatter and add XML header.)]"),
    ("optionTEXT", "   [-TEXT (Use simple Text formatter.)]"),
    ("optionHTML", "   [-HTML (Use HTML formatter.)]"),
    ("optionPARAM", "   [-PARAM name expression (Set a stylesheet parameter)]"),
    ("noParsermsg1", "XSL Process was not successful."),
    ("noParsermsg2", "** Could not find parser **"),
    ("noParsermsg3", "Please check your classpath."),
    ("noParsermsg4", "If you don't have IBM's XML Parser for Java, you can download it from"),
    ("noParsermsg5", "IBM's AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    ("optionURIRESOLVER", "   [-URIRESOLVER full class name (URIResolver to be used to resolve URIs)]"),
    ("optionENTITYRESOLVER", "   [-ENTITYRESOLVER full class name (EntityResolver to be used to resolve entities)]"),
    ("optionCONTENTHANDLER", "   [-CONTENTHANDLER full class name (ContentHandler to be used to serialize output)]"),
    ("optionLINENUMBERS", "   [-L use line numbers for source document]"),
    ("optionMEDIA", "   [-MEDIA mediaType (use media attribute to find stylesheet associated with a document.)]"),
    ("optionFLAVOR", "   [-FLAVOR flavorName (Explicitly use s2s=SAX or d2d=DOM to do transform.)]"),
    ("optionDIAG", "   [-DIAG (Print overall milliseconds transform took.)]"),
    ("optionINCREMENTAL", "   [-INCREMENTAL (request incremental DTM construction by setting http://xml.apache.org/xalan/features/incremental true.)]"),
    ("optionNOOPTIMIMIZE", "   [-NOOPTIMIMIZE (request no stylesheet optimization proccessing by setting http://xml.apache.org/xalan/features/optimize false.)]"),
    ("optionRL", "   [-RL recursionlimit (assert numeric limit on stylesheet recursion depth.)]"),
    ("optionXO", "   [-XO [transletName] (assign the name to the generated translet)]"),
    ("optionXD", "   [-XD destinationDirectory (specify a destination directory for translet)]"),
    ("optionXJ", "   [-XJ jarfile (packages translet classes into a jar file of name <jarfile>)]"),
    ("optionXP", "   [-XP package (specifies a package name prefix for all generated translet classes)]"),
    ("optionXN", "   [-XN (enables template inlining)]"),
    ("optionXX", "   [-XX (turns on additional debugging message output)]"),
    ("optionXT", "   [-XT (use translet to transform if possible)]"),
    // Miscellaneous
    ("diagTiming", " --------- Transform of {0} via {1} took {2} ms"),
    ("recursionTooDeep", "Template nesting too deep. nesting = {0}, template {1} {2}"),
    ("nameIs", "name is"),
    ("matchPatternIs", "match pattern is"),
];
